//! Lessons command implementation
//!
//! Lists the built-in lessons, or shows one in full.

use anyhow::{bail, Result};
use colored::Colorize;
use std::process::ExitCode;

use dotdash_code::content::{self, Lesson};
use dotdash_code::visual::glyphs;

/// Run the lessons command
///
/// # Arguments
/// * `id` - Lesson to show; all lessons are listed when omitted
/// * `json` - Output machine-readable JSON
pub fn run(id: Option<u32>, json: bool) -> Result<ExitCode> {
    let selected: Vec<&Lesson> = match id {
        Some(id) => match content::lesson(id) {
            Some(lesson) => vec![lesson],
            None => bail!(
                "no lesson {} (lessons run 1 to {})",
                id,
                content::lessons().len()
            ),
        },
        None => content::lessons().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(ExitCode::SUCCESS);
    }

    for lesson in &selected {
        print_lesson(lesson, id.is_some());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_lesson(lesson: &Lesson, detailed: bool) {
    let characters: String = lesson.characters.iter().collect();
    println!(
        "{} {}  [{}]",
        format!("{}.", lesson.id).cyan().bold(),
        lesson.title.bold(),
        characters
    );
    println!("   {}", lesson.description.dimmed());

    if detailed {
        println!();
        let total = lesson.exercises.len();
        for (i, exercise) in lesson.exercises.iter().enumerate() {
            println!(
                "   {:>3}%  {:<10} {:<24} {}",
                lesson.progress_percent(i + 1),
                exercise.text,
                exercise.morse,
                glyphs(exercise.morse).dimmed()
            );
        }
        println!("   {} exercises", total);
    }
}
