//! Deterministic WAV file writer.
//!
//! Rendered keying is written as mono 16-bit PCM with no timestamps or other
//! variable metadata, so identical input always yields identical bytes. The
//! BLAKE3 hash of the PCM payload identifies a rendering.

mod format;
mod result;
mod writer;


pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{encode_wav, samples_to_pcm16, HEADER_LEN};
