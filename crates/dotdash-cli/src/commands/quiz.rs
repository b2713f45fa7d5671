//! Quiz command implementation
//!
//! Prints quiz questions for a difficulty tier, or grades one answer.

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use dotdash_code::content::{self, Difficulty, QuizQuestion};

#[derive(Debug, Serialize)]
struct GradeOutput<'a> {
    difficulty: Difficulty,
    question: usize,
    morse: &'a str,
    answer: &'a str,
    correct: bool,
    seconds_left: u32,
    hint_used: bool,
    points: u32,
    max_points: u32,
    percent: u32,
}

/// Timing and hint state of one graded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Seconds left on the question clock when the answer was given.
    pub seconds_left: u32,
    /// Whether the hint was revealed.
    pub hint_used: bool,
}

impl Default for Attempt {
    fn default() -> Self {
        Self {
            seconds_left: content::QUESTION_SECONDS,
            hint_used: false,
        }
    }
}

/// Run the quiz command
///
/// # Arguments
/// * `difficulty` - Tier name (easy, medium, hard)
/// * `question` - 1-based question to grade
/// * `answer` - The learner's answer to `question`
/// * `attempt` - Clock and hint state used to score the answer
/// * `show_answers` - Include answers when listing
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: 0 when listing or when the answer is correct, 1 when it is wrong
pub fn run(
    difficulty: &str,
    question: Option<usize>,
    answer: Option<&str>,
    attempt: Attempt,
    show_answers: bool,
    json: bool,
) -> Result<ExitCode> {
    let difficulty =
        Difficulty::parse(difficulty).ok_or_else(|| anyhow!("unknown difficulty: {}", difficulty))?;
    let questions = content::quiz(difficulty);

    match (question, answer) {
        (Some(number), Some(answer)) => grade(difficulty, questions, number, answer, attempt, json),
        (None, None) => list(difficulty, questions, show_answers, json),
        _ => bail!("--question and --answer must be given together"),
    }
}

fn grade(
    difficulty: Difficulty,
    questions: &[QuizQuestion],
    number: usize,
    answer: &str,
    attempt: Attempt,
    json: bool,
) -> Result<ExitCode> {
    if attempt.seconds_left > content::QUESTION_SECONDS {
        bail!(
            "--seconds-left must be at most {}",
            content::QUESTION_SECONDS
        );
    }
    let q = select(questions, number)?;
    let output = grade_output(difficulty, number, q, answer, attempt);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if output.correct {
            println!("{} {} is {}", "CORRECT".green().bold(), q.morse, q.answer);
        } else if attempt.seconds_left == 0 {
            println!("{} {} is {}", "TIME UP".red().bold(), q.morse, q.answer);
        } else {
            println!(
                "{} {} is {}, not {}",
                "WRONG".red().bold(),
                q.morse,
                q.answer,
                answer
            );
        }
        println!(
            "  {} {} of {} points ({}%)",
            "->".green(),
            output.points,
            output.max_points,
            output.percent
        );
    }

    if output.correct {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn grade_output<'a>(
    difficulty: Difficulty,
    number: usize,
    q: &'a QuizQuestion,
    answer: &'a str,
    attempt: Attempt,
) -> GradeOutput<'a> {
    let correct = content::is_correct(answer, q.answer);
    let points = content::score_answer(correct, attempt.seconds_left, attempt.hint_used);
    GradeOutput {
        difficulty,
        question: number,
        morse: q.morse,
        answer,
        correct,
        seconds_left: attempt.seconds_left,
        hint_used: attempt.hint_used,
        points,
        max_points: content::MAX_POINTS,
        percent: content::score_percent(points, 1),
    }
}

fn list(
    difficulty: Difficulty,
    questions: &[QuizQuestion],
    show_answers: bool,
    json: bool,
) -> Result<ExitCode> {
    if json {
        if show_answers {
            println!("{}", serde_json::to_string_pretty(questions)?);
        } else {
            let hidden: Vec<serde_json::Value> = questions
                .iter()
                .map(|q| serde_json::json!({ "morse": q.morse, "hint": q.hint }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&hidden)?);
        }
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Quiz:".cyan().bold(), difficulty);
    for (i, q) in questions.iter().enumerate() {
        print!("  {:>2}. {:<28} {}", i + 1, q.morse, q.hint.dimmed());
        if show_answers {
            print!("  = {}", q.answer.bold());
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

fn select(questions: &[QuizQuestion], number: usize) -> Result<&QuizQuestion> {
    number
        .checked_sub(1)
        .and_then(|i| questions.get(i))
        .ok_or_else(|| anyhow!("no question {} (1 to {})", number, questions.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_one_based() {
        let questions = content::quiz(Difficulty::Easy);
        assert_eq!(select(questions, 1).unwrap().morse, questions[0].morse);
        assert!(select(questions, 0).is_err());
        assert!(select(questions, questions.len() + 1).is_err());
    }

    #[test]
    fn test_grading_exit_codes() {
        let first = &content::quiz(Difficulty::Easy)[0];
        let upper = first.answer.to_uppercase();
        assert_eq!(
            run("easy", Some(1), Some(&upper), Attempt::default(), false, true).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            run("easy", Some(1), Some("definitely wrong"), Attempt::default(), false, true)
                .unwrap(),
            ExitCode::from(1)
        );
    }

    #[test]
    fn test_grade_scores_attempt() {
        let q = &content::quiz(Difficulty::Hard)[1];

        let fast = grade_output(Difficulty::Hard, 2, q, q.answer, Attempt::default());
        assert_eq!(fast.points, 11);
        assert_eq!(fast.percent, 100);

        let hinted = Attempt {
            seconds_left: 12,
            hint_used: true,
        };
        let output = grade_output(Difficulty::Hard, 2, q, q.answer, hinted);
        assert_eq!(output.points, 5);
        assert_eq!(output.percent, 45);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["hint_used"], true);
        assert_eq!(json["max_points"], 11);

        let wrong = grade_output(Difficulty::Hard, 2, q, "nope", Attempt::default());
        assert_eq!(wrong.points, 0);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(run("expert", None, None, Attempt::default(), false, false).is_err());
        assert!(run("easy", Some(1), None, Attempt::default(), false, false).is_err());
        let late = Attempt {
            seconds_left: 31,
            hint_used: false,
        };
        assert!(run("easy", Some(1), Some("e"), late, false, false).is_err());
    }
}
