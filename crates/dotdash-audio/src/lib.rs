//! dotdash Audio
//!
//! Keyed-tone synthesis for Morse strings.
//!
//! # Overview
//!
//! Playback is a one-shot schedule. [`play`] reads the clock of an
//! [`AudioContext`], lays out one tone per dot or dash using the timing from
//! [`dotdash_code::timing`], submits the tones, and returns a
//! [`PlaybackHandle`] without waiting for them to sound. Audio failures never
//! propagate out of `play`; they truncate the playback and are logged.
//!
//! # Determinism
//!
//! Offline rendering is deterministic: given the same Morse string, config,
//! and sample rate, the PCM output is byte-identical across runs.
//!
//! # Example
//!
//! ```
//! use dotdash_audio::{render, PlayConfig};
//!
//! let result = render("... --- ...", &PlayConfig::default(), 8_000).unwrap();
//! assert_eq!(result.playback.pulse_count, 9);
//! assert_eq!(result.wav.num_samples, 12_960);
//! ```
//!
//! # Crate Structure
//!
//! - [`config`] - Keying and tone configuration
//! - [`context`] - The audio context trait and offline/null contexts
//! - [`envelope`] - Rise/fall shaping for keyed pulses
//! - [`oscillator`] - Basic waveform generators
//! - [`player`] - Fire-and-forget scheduling
//! - [`render`] - Morse string to WAV in one call
//! - [`wav`] - Deterministic WAV file writer

pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod player;
pub mod render;
pub mod wav;

pub use config::{PlayConfig, ToneConfig};
pub use context::{AudioContext, NullContext, OfflineContext, ToneEvent};
pub use error::{AudioError, AudioResult};
pub use oscillator::Waveform;
pub use player::{play, PlaybackHandle};
pub use render::{render, RenderResult};
pub use wav::{WavFormat, WavResult};
