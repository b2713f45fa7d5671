//! Check-content command implementation
//!
//! Verifies that every authored lesson and quiz string matches the encoder.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use dotdash_code::content::verify_content;
use dotdash_code::SymbolTable;

/// Run the check-content command
///
/// # Returns
/// Exit code: 0 if all content matches, 1 if any string differs
pub fn run(json: bool) -> Result<ExitCode> {
    let mismatches = verify_content(SymbolTable::standard());

    if json {
        println!("{}", serde_json::to_string_pretty(&mismatches)?);
    } else if mismatches.is_empty() {
        println!("{} All content matches the encoder", "SUCCESS".green().bold());
    } else {
        for m in &mismatches {
            println!("  {} {}: {:?}", "!!".red(), m.location, m.text);
            println!("     authored {}", m.authored);
            println!("     expected {}", m.expected.green());
        }
        println!(
            "{} {} mismatched strings",
            "FAILED".red().bold(),
            mismatches.len()
        );
    }

    if mismatches.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
