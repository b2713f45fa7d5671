//! The Morse symbol table.
//!
//! A [`SymbolTable`] is a bijection between single lowercase characters and
//! Morse patterns. The reverse direction is derived when the table is built,
//! and construction fails if two characters would share a pattern.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::TableError;

/// Token that stands for a literal space in a Morse string.
pub const WORD_SEPARATOR: &str = "/";

/// Separator placed between per-character patterns.
pub const LETTER_SEPARATOR: char = ' ';

/// The canonical table, in the order lessons and listings present it.
pub const STANDARD_ENTRIES: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..-.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', WORD_SEPARATOR),
];

static STANDARD: OnceLock<SymbolTable> = OnceLock::new();

/// Immutable character ↔ pattern lookup.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    order: Vec<char>,
    forward: HashMap<char, String>,
    reverse: HashMap<String, char>,
}

impl SymbolTable {
    /// Builds a table from `(character, pattern)` entries.
    ///
    /// Patterns must be non-empty and consist of `.` and `-` only. The one
    /// exception is [`WORD_SEPARATOR`], which is reserved for the space
    /// character. Characters are stored as given; callers should pass
    /// lowercase characters since [`encode`](Self::encode) lower-cases input.
    pub fn new<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut forward = HashMap::new();
        let mut reverse: HashMap<String, char> = HashMap::new();

        for (character, pattern) in entries {
            let pattern = pattern.into();
            validate_pattern(character, &pattern)?;

            if forward.contains_key(&character) {
                return Err(TableError::DuplicateCharacter { character });
            }
            if let Some(&first) = reverse.get(&pattern) {
                return Err(TableError::DuplicatePattern {
                    pattern,
                    first,
                    second: character,
                });
            }

            order.push(character);
            reverse.insert(pattern.clone(), character);
            forward.insert(character, pattern);
        }

        Ok(Self {
            order,
            forward,
            reverse,
        })
    }

    /// Returns the process-wide standard table.
    ///
    /// Built on first use. A broken [`STANDARD_ENTRIES`] aborts here rather
    /// than producing a table that decodes ambiguously.
    pub fn standard() -> &'static SymbolTable {
        STANDARD.get_or_init(|| {
            SymbolTable::new(STANDARD_ENTRIES.iter().copied())
                .expect("standard Morse table must be a bijection")
        })
    }

    /// Pattern for a character, if the table covers it.
    pub fn pattern(&self, character: char) -> Option<&str> {
        self.forward.get(&character).map(String::as_str)
    }

    /// Character for a pattern, if the table covers it.
    pub fn character(&self, pattern: &str) -> Option<char> {
        self.reverse.get(pattern).copied()
    }

    /// Returns true if `character` is in the table's domain.
    pub fn contains(&self, character: char) -> bool {
        self.forward.contains_key(&character)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.order
            .iter()
            .map(move |c| (*c, self.forward[c].as_str()))
    }
}

fn validate_pattern(character: char, pattern: &str) -> Result<(), TableError> {
    let invalid = |message: &str| TableError::InvalidPattern {
        character,
        pattern: pattern.to_string(),
        message: message.to_string(),
    };

    if pattern == WORD_SEPARATOR {
        return if character == ' ' {
            Ok(())
        } else {
            Err(invalid("the word separator is reserved for space"))
        };
    }
    if pattern.is_empty() {
        return Err(invalid("pattern is empty"));
    }
    if !pattern.chars().all(|c| c == '.' || c == '-') {
        return Err(invalid("only '.' and '-' are allowed"));
    }
    Ok(())
}
