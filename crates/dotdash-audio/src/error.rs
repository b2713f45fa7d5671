//! Error types for the audio crate.

use dotdash_code::KeyingError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while configuring or driving audio output.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid tone frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Invalid keying configuration.
    #[error("invalid keying: {0}")]
    Keying(#[from] KeyingError),

    /// Configuration could not be parsed.
    #[error("invalid play config: {0}")]
    Config(#[from] serde_json::Error),

    /// The output device or render target cannot accept tones.
    #[error("audio output unavailable: {message}")]
    OutputUnavailable {
        /// Why the output is unavailable.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an output unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::OutputUnavailable {
            message: message.into(),
        }
    }

    /// Returns a stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidFrequency { .. } => "AUDIO_002",
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::Keying(_) => "AUDIO_004",
            AudioError::Config(_) => "AUDIO_005",
            AudioError::OutputUnavailable { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("gain", "must be between 0 and 1");
        assert!(err.to_string().contains("gain"));
        assert!(err.to_string().contains("between 0 and 1"));
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_unavailable_helper() {
        let err = AudioError::unavailable("no device");
        assert_eq!(err.to_string(), "audio output unavailable: no device");
        assert_eq!(err.code(), "AUDIO_006");
    }

    #[test]
    fn test_keying_error_converts() {
        let err: AudioError = KeyingError::InvalidUnit { unit_ms: 0.0 }.into();
        assert!(matches!(err, AudioError::Keying(_)));
    }
}
