//! Play configuration from a JSON file plus command-line overrides.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use dotdash_audio::{PlayConfig, Waveform};
use dotdash_code::Keying;
use tracing::debug;

/// Timing and tone options shared by `play` and `timing`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a play config JSON file
    #[arg(long)]
    pub config: Option<String>,

    /// Unit (dot) length in milliseconds [default: 60]
    #[arg(long, conflicts_with = "wpm")]
    pub unit_ms: Option<f64>,

    /// Speed in words per minute, PARIS standard
    #[arg(long)]
    pub wpm: Option<f64>,

    /// Tone frequency in Hz [default: 700]
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Tone gain, 0 to 1 [default: 0.5]
    #[arg(long)]
    pub gain: Option<f64>,

    /// Tone waveform [default: sine]
    #[arg(long, value_parser = ["sine", "square", "sawtooth", "triangle"])]
    pub waveform: Option<String>,

    /// Rise/fall time of each pulse in milliseconds [default: 0]
    #[arg(long)]
    pub ramp_ms: Option<f64>,
}

impl ConfigArgs {
    /// Builds and validates the effective config.
    pub fn resolve(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(Path::new(path))
                .with_context(|| format!("failed to load config {}", path))?,
            None => PlayConfig::default(),
        };

        if let Some(unit_ms) = self.unit_ms {
            config.keying = Keying { unit_ms };
        }
        if let Some(wpm) = self.wpm {
            config.keying = Keying::from_wpm(wpm)?;
        }
        if let Some(frequency) = self.frequency {
            config.tone.frequency_hz = frequency;
        }
        if let Some(gain) = self.gain {
            config.tone.gain = gain;
        }
        if let Some(name) = &self.waveform {
            config.tone.waveform =
                Waveform::parse(name).ok_or_else(|| anyhow!("unknown waveform: {}", name))?;
        }
        if let Some(ramp_ms) = self.ramp_ms {
            config.tone.ramp_ms = ramp_ms;
        }

        config.validate()?;
        debug!(?config, "resolved play config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConfigArgs::default().resolve().unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = ConfigArgs {
            unit_ms: Some(40.0),
            frequency: Some(600.0),
            waveform: Some("triangle".to_string()),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.keying.unit_ms, 40.0);
        assert_eq!(config.tone.frequency_hz, 600.0);
        assert_eq!(config.tone.waveform, Waveform::Triangle);
        assert_eq!(config.tone.gain, 0.5);
    }

    #[test]
    fn test_wpm() {
        let args = ConfigArgs {
            wpm: Some(12.0),
            ..Default::default()
        };
        assert_eq!(args.resolve().unwrap().keying.unit_ms, 100.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = ConfigArgs {
            gain: Some(3.0),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_file_then_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tone": {{"frequency_hz": 550.0, "gain": 0.2}}}}"#).unwrap();

        let args = ConfigArgs {
            config: Some(file.path().to_string_lossy().into_owned()),
            gain: Some(0.3),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.tone.frequency_hz, 550.0);
        assert_eq!(config.tone.gain, 0.3);
    }

    #[test]
    fn test_missing_file() {
        let args = ConfigArgs {
            config: Some("/nonexistent/dotdash.json".to_string()),
            ..Default::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
