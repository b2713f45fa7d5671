//! Decode command implementation
//!
//! Translates Morse to text.

use anyhow::Result;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Serialize)]
struct DecodeOutput<'a> {
    morse: &'a str,
    text: String,
}

/// Run the decode command
///
/// Tokens with no match in the table pass through verbatim.
pub fn run(morse: &str, json: bool) -> Result<ExitCode> {
    let output = DecodeOutput {
        morse,
        text: dotdash_code::decode(morse),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.text);
    }

    Ok(ExitCode::SUCCESS)
}
