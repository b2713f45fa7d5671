//! Table command implementation
//!
//! Lists the standard symbol table.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use dotdash_code::visual::glyphs;
use dotdash_code::SymbolTable;

#[derive(Debug, Serialize)]
struct TableEntry<'a> {
    character: char,
    pattern: &'a str,
}

/// Run the table command
pub fn run(json: bool) -> Result<ExitCode> {
    let table = SymbolTable::standard();
    let entries: Vec<TableEntry<'_>> = table
        .iter()
        .map(|(character, pattern)| TableEntry { character, pattern })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} ({} entries)", "Morse table".cyan().bold(), entries.len());
    for entry in &entries {
        let label = if entry.character == ' ' {
            "space".to_string()
        } else {
            entry.character.to_string()
        };
        println!(
            "  {:<6} {:<8} {}",
            label.bold(),
            entry.pattern,
            glyphs(entry.pattern).dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
