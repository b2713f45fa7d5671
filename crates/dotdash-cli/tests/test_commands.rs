//! Command-level integration tests.

use std::io::Write;
use std::process::ExitCode;

use dotdash_cli::commands::{self, config::ConfigArgs};

#[test]
fn test_play_honours_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("slow.json");
    let mut file = std::fs::File::create(&config_path).unwrap();
    write!(file, r#"{{"keying": {{"unit_ms": 100.0}}}}"#).unwrap();

    let wav_path = dir.path().join("e.wav");
    let config = ConfigArgs {
        config: Some(config_path.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let code = commands::play::run(
        Some("."),
        None,
        &config,
        wav_path.to_str().unwrap(),
        8_000,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    // One dot at 100 ms, 8 kHz, 16-bit mono.
    let bytes = std::fs::read(&wav_path).unwrap();
    assert_eq!(bytes.len(), 44 + 800 * 2);
}

#[test]
fn test_play_rejects_tone_above_nyquist() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("high.wav");
    let config = ConfigArgs {
        frequency: Some(6_000.0),
        ..Default::default()
    };
    let err = commands::play::run(
        Some("..."),
        None,
        &config,
        wav_path.to_str().unwrap(),
        8_000,
        true,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("6000"));
    assert!(!wav_path.exists());
}

#[test]
fn test_play_rejects_overlong_unit() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("slow.wav");
    let config = ConfigArgs {
        unit_ms: Some(1e12),
        ..Default::default()
    };
    let result = commands::play::run(
        Some("."),
        None,
        &config,
        wav_path.to_str().unwrap(),
        8_000,
        true,
    );
    assert!(result.is_err());
    assert!(!wav_path.exists());
}

#[test]
fn test_play_rejects_invalid_gain() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("loud.wav");
    let config = ConfigArgs {
        gain: Some(4.0),
        ..Default::default()
    };
    let result = commands::play::run(
        Some("..."),
        None,
        &config,
        wav_path.to_str().unwrap(),
        8_000,
        true,
    );
    assert!(result.is_err());
    assert!(!wav_path.exists());
}

#[test]
fn test_shipped_content_checks_clean() {
    assert_eq!(commands::check_content::run(true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_listing_commands_succeed() {
    assert_eq!(commands::table::run(true).unwrap(), ExitCode::SUCCESS);
    assert_eq!(commands::lessons::run(None, true).unwrap(), ExitCode::SUCCESS);
    assert_eq!(commands::lessons::run(Some(1), false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(
        commands::quiz::run("medium", None, None, Default::default(), true, false).unwrap(),
        ExitCode::SUCCESS
    );
}

#[test]
fn test_unknown_lesson_is_an_error() {
    let err = commands::lessons::run(Some(99), false).unwrap_err();
    assert!(err.to_string().contains("no lesson 99"));
}

#[test]
fn test_morse_input_encodes_text() {
    let morse = commands::morse_input(None, Some("Hi there")).unwrap();
    pretty_assertions::assert_eq!(morse, ".... .. / - .... . .-. .");
}
