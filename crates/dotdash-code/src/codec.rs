//! Text ↔ Morse translation.
//!
//! Both directions are lenient: anything the table does not cover passes
//! through unchanged, so partially typed input still produces a preview.

use crate::table::{SymbolTable, LETTER_SEPARATOR};

impl SymbolTable {
    /// Encodes text as a Morse string.
    ///
    /// Input is lower-cased, each character is replaced by its pattern (or
    /// kept verbatim when unknown), and the results are joined by single
    /// spaces. A space becomes the `/` token.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);

        for (i, character) in text.chars().flat_map(char::to_lowercase).enumerate() {
            if i > 0 {
                out.push(LETTER_SEPARATOR);
            }
            match self.pattern(character) {
                Some(pattern) => out.push_str(pattern),
                None => out.push(character),
            }
        }

        out
    }

    /// Decodes a Morse string.
    ///
    /// The input is split on single spaces and each token is looked up in
    /// reverse. Unknown tokens are emitted verbatim; empty tokens produced by
    /// repeated spaces vanish.
    pub fn decode(&self, morse: &str) -> String {
        let mut out = String::with_capacity(morse.len() / 2);

        for token in morse.split(LETTER_SEPARATOR) {
            match self.character(token) {
                Some(character) => out.push(character),
                None => out.push_str(token),
            }
        }

        out
    }
}

/// Encodes text with the standard table.
///
/// ```
/// assert_eq!(dotdash_code::encode("SOS"), "... --- ...");
/// ```
pub fn encode(text: &str) -> String {
    SymbolTable::standard().encode(text)
}

/// Decodes a Morse string with the standard table.
///
/// ```
/// assert_eq!(dotdash_code::decode("... --- ..."), "sos");
/// ```
pub fn decode(morse: &str) -> String {
    SymbolTable::standard().decode(morse)
}
