//! Error types for symbol table construction and keying validation.
//!
//! Encoding and decoding never fail; these errors only surface when a table
//! is built from custom entries or when a timing configuration is invalid.

use thiserror::Error;

/// Errors that can occur while building a [`SymbolTable`](crate::SymbolTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two characters map to the same pattern.
    #[error("pattern '{pattern}' is assigned to both {first:?} and {second:?}")]
    DuplicatePattern {
        /// The shared pattern.
        pattern: String,
        /// Character that claimed the pattern first.
        first: char,
        /// Character that tried to claim it again.
        second: char,
    },

    /// The same character appears twice.
    #[error("character {character:?} is listed more than once")]
    DuplicateCharacter {
        /// The repeated character.
        character: char,
    },

    /// A pattern is empty or contains symbols other than `.` and `-`.
    #[error("invalid pattern '{pattern}' for {character:?}: {message}")]
    InvalidPattern {
        /// Character the pattern belongs to.
        character: char,
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        message: String,
    },
}

impl TableError {
    /// Returns a stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            TableError::DuplicatePattern { .. } => "TABLE_001",
            TableError::DuplicateCharacter { .. } => "TABLE_002",
            TableError::InvalidPattern { .. } => "TABLE_003",
        }
    }
}

/// Errors raised when validating a [`Keying`](crate::Keying) configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyingError {
    /// The timing unit is not positive or exceeds the maximum.
    #[error(
        "invalid unit duration: {unit_ms} ms (must be above 0 and at most {max} ms)",
        max = crate::timing::MAX_UNIT_MS
    )]
    InvalidUnit {
        /// The rejected unit in milliseconds.
        unit_ms: f64,
    },
}

impl KeyingError {
    /// Returns a stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            KeyingError::InvalidUnit { .. } => "KEYING_001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_pattern_message() {
        let err = TableError::DuplicatePattern {
            pattern: ".-".to_string(),
            first: 'a',
            second: 'z',
        };
        let msg = err.to_string();
        assert!(msg.contains(".-"));
        assert!(msg.contains("'a'"));
        assert!(msg.contains("'z'"));
        assert_eq!(err.code(), "TABLE_001");
    }

    #[test]
    fn test_invalid_unit_message() {
        let err = KeyingError::InvalidUnit { unit_ms: -5.0 };
        assert!(err.to_string().contains("-5"));
        assert_eq!(err.code(), "KEYING_001");
    }
}
