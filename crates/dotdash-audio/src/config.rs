//! Playback configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "keying": { "unit_ms": 60.0 },
//!   "tone": { "frequency_hz": 700.0, "gain": 0.5, "waveform": "sine", "ramp_ms": 0.0 }
//! }
//! ```

use std::path::Path;

use dotdash_code::Keying;
use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};
use crate::oscillator::Waveform;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 700.0;
/// Default tone gain (fraction of full scale).
pub const DEFAULT_GAIN: f64 = 0.5;

/// Tone parameters shared by every pulse of a playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Carrier frequency in Hz.
    pub frequency_hz: f64,
    /// Amplitude, 0.0 to 1.0.
    pub gain: f64,
    /// Carrier waveform.
    pub waveform: Waveform,
    /// Rise and fall time of each pulse in milliseconds.
    pub ramp_ms: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            gain: DEFAULT_GAIN,
            waveform: Waveform::Sine,
            ramp_ms: 0.0,
        }
    }
}

impl ToneConfig {
    /// Validates the tone parameters.
    pub fn validate(&self) -> AudioResult<()> {
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.frequency_hz,
            });
        }
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(AudioError::invalid_param(
                "gain",
                format!("must be between 0 and 1, got {}", self.gain),
            ));
        }
        if !self.ramp_ms.is_finite() || self.ramp_ms < 0.0 {
            return Err(AudioError::invalid_param(
                "ramp_ms",
                format!("must be a non-negative duration, got {}", self.ramp_ms),
            ));
        }
        Ok(())
    }
}

/// Complete playback configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Timing.
    pub keying: Keying,
    /// Tone.
    pub tone: ToneConfig,
}

impl PlayConfig {
    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> AudioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> AudioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AudioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates keying and tone.
    pub fn validate(&self) -> AudioResult<()> {
        self.keying.validate()?;
        self.tone.validate()
    }
}
