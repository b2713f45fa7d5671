//! Offline rendering of Morse strings to WAV.

use dotdash_code::schedule;

use crate::config::PlayConfig;
use crate::context::OfflineContext;
use crate::error::{AudioError, AudioResult};
use crate::player::{play, PlaybackHandle};
use crate::wav::WavResult;

/// Result of rendering a Morse string.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered audio.
    pub wav: WavResult,
    /// What was scheduled.
    pub playback: PlaybackHandle,
}

/// Longest rendering accepted, in seconds.
pub const MAX_RENDER_SECONDS: f64 = 3600.0;

/// Renders a Morse string to a mono WAV at `sample_rate`.
///
/// The config is validated up front so a bad tone or timing is reported
/// instead of producing silence. That includes a tone at or above the Nyquist
/// frequency of `sample_rate` and a schedule longer than
/// [`MAX_RENDER_SECONDS`]. The buffer runs to the end of the schedule,
/// including any trailing word gap.
pub fn render(morse: &str, config: &PlayConfig, sample_rate: u32) -> AudioResult<RenderResult> {
    config.validate()?;
    let mut ctx = OfflineContext::new(sample_rate)?;

    let nyquist = sample_rate as f64 / 2.0;
    if config.tone.frequency_hz >= nyquist {
        return Err(AudioError::InvalidFrequency {
            freq: config.tone.frequency_hz,
        });
    }

    let length = schedule(morse, &config.keying, 0.0).total_duration();
    if length > MAX_RENDER_SECONDS {
        return Err(AudioError::invalid_param(
            "duration",
            format!(
                "rendering would last {:.0}s, limit is {:.0}s",
                length, MAX_RENDER_SECONDS
            ),
        ));
    }

    let playback = play(&mut ctx, morse, config);
    ctx.advance_to(playback.end);

    Ok(RenderResult {
        wav: ctx.render_wav(),
        playback,
    })
}
