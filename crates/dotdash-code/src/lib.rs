//! dotdash Morse code core
//!
//! This crate holds everything about Morse that does not touch audio:
//!
//! - [`table`] - The symbol table and its bijection check
//! - [`codec`] - Lenient text ↔ Morse translation
//! - [`timing`] - Keying configuration and pulse scheduling
//! - [`content`] - Lesson and quiz content with an authoring check
//! - [`visual`] - Glyph rendering for display
//!
//! # Format
//!
//! A Morse string is a sequence of per-character patterns separated by single
//! spaces. A space in the source text becomes the `/` token, so words are
//! separated by `" / "`. There is no escaping; text that already looks like
//! Morse is indistinguishable from encoded output.
//!
//! # Example
//!
//! ```
//! use dotdash_code::{decode, encode, schedule, Keying};
//!
//! let morse = encode("SOS");
//! assert_eq!(morse, "... --- ...");
//! assert_eq!(decode(&morse), "sos");
//!
//! let plan = schedule(&morse, &Keying::default(), 0.0);
//! assert_eq!(plan.pulse_count(), 9);
//! assert_eq!(plan.total_units, 27);
//! ```

pub mod codec;
pub mod content;
pub mod error;
pub mod table;
pub mod timing;
pub mod visual;

pub use codec::{decode, encode};
pub use error::{KeyingError, TableError};
pub use table::{SymbolTable, LETTER_SEPARATOR, WORD_SEPARATOR};
pub use timing::{schedule, Element, Keying, Pulse, Schedule};
