//! Play command implementation
//!
//! Renders keyed Morse audio to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use dotdash_audio::{render, PlaybackHandle, RenderResult};

use super::config::ConfigArgs;
use super::morse_input;

#[derive(Debug, Serialize)]
struct PlayOutput<'a> {
    morse: &'a str,
    output: &'a str,
    sample_rate: u32,
    num_samples: usize,
    duration_seconds: f64,
    pcm_hash: &'a str,
    playback: PlaybackHandle,
}

/// Run the play command
///
/// # Arguments
/// * `morse` - Morse string to play
/// * `text` - Text to encode and play instead of `morse`
/// * `config` - Timing and tone options
/// * `output` - WAV output path
/// * `sample_rate` - Render sample rate in Hz
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every pulse was rendered, 1 if playback was truncated
pub fn run(
    morse: Option<&str>,
    text: Option<&str>,
    config: &ConfigArgs,
    output: &str,
    sample_rate: u32,
    json: bool,
) -> Result<ExitCode> {
    let morse = morse_input(morse, text)?;
    let config = config.resolve()?;

    let result = render(&morse, &config, sample_rate).context("failed to render audio")?;
    result
        .wav
        .write_to(Path::new(output))
        .with_context(|| format!("failed to write {}", output))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&play_output(&morse, output, &result))?);
    } else {
        print_summary(&morse, output, &result);
    }

    Ok(exit_code(&result.playback))
}

fn exit_code(playback: &PlaybackHandle) -> ExitCode {
    if playback.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn play_output<'a>(morse: &'a str, output: &'a str, result: &'a RenderResult) -> PlayOutput<'a> {
    PlayOutput {
        morse,
        output,
        sample_rate: result.wav.sample_rate,
        num_samples: result.wav.num_samples,
        duration_seconds: result.wav.duration_seconds(),
        pcm_hash: &result.wav.pcm_hash,
        playback: result.playback,
    }
}

fn print_summary(morse: &str, output: &str, result: &RenderResult) {
    let playback = &result.playback;
    println!("{} {}", "Playing:".cyan().bold(), morse);
    println!(
        "  {} {} pulses, {} letters, {} word gaps",
        "->".green(),
        playback.pulse_count,
        playback.letter_count,
        playback.word_gaps
    );
    println!(
        "  {} {:.3}s at {} Hz",
        "->".green(),
        result.wav.duration_seconds(),
        result.wav.sample_rate
    );
    println!("  {} pcm {}", "->".green(), result.wav.pcm_hash.dimmed());

    if playback.is_complete() {
        println!("{} Wrote {}", "SUCCESS".green().bold(), output);
    } else {
        println!(
            "{} Wrote {} with {} of {} pulses",
            "TRUNCATED".yellow().bold(),
            output,
            playback.scheduled,
            playback.pulse_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdash_audio::{play, AudioContext, AudioError, AudioResult, PlayConfig, ToneEvent};

    /// Takes a fixed number of tones, then reports the output as gone.
    struct FlakyOutput {
        remaining: usize,
    }

    impl AudioContext for FlakyOutput {
        fn sample_rate(&self) -> u32 {
            8_000
        }

        fn current_time(&self) -> f64 {
            0.0
        }

        fn schedule(&mut self, _tone: &ToneEvent) -> AudioResult<()> {
            if self.remaining == 0 {
                return Err(AudioError::unavailable("output closed"));
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_play_output_fields() {
        let result = render("...", &PlayConfig::default(), 8_000).unwrap();
        let output = play_output("...", "out.wav", &result);
        assert_eq!(output.num_samples, 5 * 480);
        assert_eq!(output.playback.pulse_count, 3);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["sample_rate"], 8_000);
        assert_eq!(json["playback"]["letter_count"], 1);
        assert_eq!(json["pcm_hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_truncated_playback_exits_nonzero() {
        let mut output = FlakyOutput { remaining: 4 };
        let truncated = play(&mut output, "... --- ...", &PlayConfig::default());
        assert_eq!(truncated.scheduled, 4);
        assert_eq!(exit_code(&truncated), ExitCode::from(1));

        let mut output = FlakyOutput { remaining: 9 };
        let complete = play(&mut output, "... --- ...", &PlayConfig::default());
        assert_eq!(exit_code(&complete), ExitCode::SUCCESS);
    }

    #[test]
    fn test_run_writes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.wav");
        let path = path.to_str().unwrap();

        let code = run(None, Some("sos"), &ConfigArgs::default(), path, 8_000, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(bytes.len(), 44 + 27 * 480 * 2);
    }

    #[test]
    fn test_run_rejects_bad_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.wav");
        let err = run(
            Some("."),
            None,
            &ConfigArgs::default(),
            path.to_str().unwrap(),
            100,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to render audio"));
        assert!(!path.exists());
    }
}
