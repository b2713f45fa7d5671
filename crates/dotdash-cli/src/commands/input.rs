//! Morse input resolution shared by commands that take Morse or text.

use anyhow::{bail, Result};

/// Returns the Morse to operate on: `morse` as given, or `text` encoded.
pub fn morse_input(morse: Option<&str>, text: Option<&str>) -> Result<String> {
    match (morse, text) {
        (Some(morse), None) => Ok(morse.to_string()),
        (None, Some(text)) => Ok(dotdash_code::encode(text)),
        (Some(_), Some(_)) => bail!("pass either a Morse string or --text, not both"),
        (None, None) => bail!("no input: pass a Morse string or --text"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morse_input_sources() {
        assert_eq!(morse_input(Some(".-"), None).unwrap(), ".-");
        assert_eq!(morse_input(None, Some("SOS")).unwrap(), "... --- ...");
        assert!(morse_input(Some(".-"), Some("a")).is_err());
        assert!(morse_input(None, None).is_err());
    }
}
