//! dotdash CLI - Morse code translation and keyed-tone rendering
//!
//! This binary provides commands for encoding and decoding Morse, rendering
//! it to audio, and browsing the built-in lessons and quizzes.

mod cli_args;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use dotdash_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let result = match cli.command {
        Commands::Encode { text, glyphs, json } => commands::encode::run(&text, glyphs, json),
        Commands::Decode { morse, json } => commands::decode::run(&morse, json),
        Commands::Play {
            morse,
            text,
            output,
            sample_rate,
            config,
            json,
        } => commands::play::run(
            morse.as_deref(),
            text.as_deref(),
            &config,
            &output,
            sample_rate,
            json,
        ),
        Commands::Timing {
            morse,
            text,
            pulses,
            config,
            json,
        } => commands::timing::run(morse.as_deref(), text.as_deref(), &config, pulses, json),
        Commands::Table { json } => commands::table::run(json),
        Commands::Lessons { id, json } => commands::lessons::run(id, json),
        Commands::Quiz {
            difficulty,
            question,
            answer,
            seconds_left,
            hint,
            answers,
            json,
        } => {
            let mut attempt = commands::quiz::Attempt {
                hint_used: hint,
                ..Default::default()
            };
            if let Some(seconds) = seconds_left {
                attempt.seconds_left = seconds;
            }
            commands::quiz::run(
                &difficulty,
                question,
                answer.as_deref(),
                attempt,
                answers,
                json,
            )
        }
        Commands::CheckContent { json } => commands::check_content::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::try_parse_from(["dotdash", "encode", "Hi there", "--glyphs"]).unwrap();
        match cli.command {
            Commands::Encode { text, glyphs, json } => {
                assert_eq!(text, "Hi there");
                assert!(glyphs);
                assert!(!json);
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_parses_decode_with_json() {
        let cli = Cli::try_parse_from(["dotdash", "decode", "... --- ...", "--json"]).unwrap();
        match cli.command {
            Commands::Decode { morse, json } => {
                assert_eq!(morse, "... --- ...");
                assert!(json);
            }
            _ => panic!("expected decode command"),
        }
    }

    #[test]
    fn test_cli_parses_play() {
        let cli = Cli::try_parse_from([
            "dotdash",
            "play",
            "--text",
            "sos",
            "-o",
            "sos.wav",
            "--wpm",
            "20",
            "--waveform",
            "square",
        ])
        .unwrap();
        match cli.command {
            Commands::Play {
                morse,
                text,
                output,
                sample_rate,
                config,
                json,
            } => {
                assert!(morse.is_none());
                assert_eq!(text.as_deref(), Some("sos"));
                assert_eq!(output, "sos.wav");
                assert_eq!(sample_rate, 44_100);
                assert_eq!(config.wpm, Some(20.0));
                assert_eq!(config.waveform.as_deref(), Some("square"));
                assert!(!json);
            }
            _ => panic!("expected play command"),
        }
    }

    #[test]
    fn test_cli_play_requires_input_and_output() {
        assert!(Cli::try_parse_from(["dotdash", "play", "-o", "out.wav"]).is_err());
        assert!(Cli::try_parse_from(["dotdash", "play", "..."]).is_err());
        assert!(
            Cli::try_parse_from(["dotdash", "play", "...", "--text", "s", "-o", "x.wav"]).is_err()
        );
    }

    #[test]
    fn test_cli_rejects_unit_and_wpm_together() {
        let result = Cli::try_parse_from([
            "dotdash", "timing", "...", "--unit-ms", "50", "--wpm", "20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_waveform() {
        let result = Cli::try_parse_from(["dotdash", "timing", "...", "--waveform", "noise"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_timing() {
        let cli = Cli::try_parse_from(["dotdash", "timing", "- . ... -", "--pulses"]).unwrap();
        match cli.command {
            Commands::Timing { morse, pulses, .. } => {
                assert_eq!(morse.as_deref(), Some("- . ... -"));
                assert!(pulses);
            }
            _ => panic!("expected timing command"),
        }
    }

    #[test]
    fn test_cli_parses_lessons() {
        let cli = Cli::try_parse_from(["dotdash", "lessons", "3"]).unwrap();
        match cli.command {
            Commands::Lessons { id, json } => {
                assert_eq!(id, Some(3));
                assert!(!json);
            }
            _ => panic!("expected lessons command"),
        }
    }

    #[test]
    fn test_cli_parses_quiz() {
        let cli = Cli::try_parse_from([
            "dotdash", "quiz", "-d", "hard", "-q", "2", "-a", "program", "--seconds-left", "17",
            "--hint",
        ])
        .unwrap();
        match cli.command {
            Commands::Quiz {
                difficulty,
                question,
                answer,
                seconds_left,
                hint,
                answers,
                ..
            } => {
                assert_eq!(difficulty, "hard");
                assert_eq!(question, Some(2));
                assert_eq!(answer.as_deref(), Some("program"));
                assert_eq!(seconds_left, Some(17));
                assert!(hint);
                assert!(!answers);
            }
            _ => panic!("expected quiz command"),
        }
    }

    #[test]
    fn test_cli_quiz_answer_needs_question() {
        assert!(Cli::try_parse_from(["dotdash", "quiz", "-a", "sos"]).is_err());
        assert!(Cli::try_parse_from(["dotdash", "quiz", "--hint"]).is_err());
        assert!(Cli::try_parse_from(["dotdash", "quiz", "-d", "expert"]).is_err());
    }

    #[test]
    fn test_cli_parses_check_content() {
        let cli = Cli::try_parse_from(["dotdash", "check-content"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckContent { json: false }));
    }
}
