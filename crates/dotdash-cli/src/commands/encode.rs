//! Encode command implementation
//!
//! Translates text to Morse.

use anyhow::Result;
use serde::Serialize;
use std::process::ExitCode;

use dotdash_code::visual::glyphs;

#[derive(Debug, Serialize)]
struct EncodeOutput<'a> {
    text: &'a str,
    morse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    glyphs: Option<String>,
}

/// Run the encode command
///
/// # Arguments
/// * `text` - Text to encode
/// * `show_glyphs` - Also render the Morse as dot/dash glyphs
/// * `json` - Output machine-readable JSON
pub fn run(text: &str, show_glyphs: bool, json: bool) -> Result<ExitCode> {
    let output = encode_output(text, show_glyphs);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.morse);
        if let Some(glyphs) = &output.glyphs {
            println!("{}", glyphs);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn encode_output(text: &str, show_glyphs: bool) -> EncodeOutput<'_> {
    let morse = dotdash_code::encode(text);
    let glyphs = show_glyphs.then(|| glyphs(&morse));
    EncodeOutput {
        text,
        morse,
        glyphs,
    }
}
