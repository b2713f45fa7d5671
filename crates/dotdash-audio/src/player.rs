//! Fire-and-forget Morse playback.
//!
//! [`play`] turns a Morse string into tone events on an [`AudioContext`] and
//! returns a [`PlaybackHandle`] describing what was scheduled. It never fails:
//! a context that refuses a tone truncates the playback, and the refusal is
//! logged. Nothing coordinates concurrent playbacks on the same context, so
//! callers that want them in sequence should advance the clock to the
//! previous handle's [`end`](PlaybackHandle::end) first.

use dotdash_code::{schedule, Schedule};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::PlayConfig;
use crate::context::{AudioContext, ToneEvent};
use crate::envelope::KeyingEnvelope;

/// Descriptor of one scheduled playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackHandle {
    /// Clock time the playback starts.
    pub start: f64,
    /// Clock time the last gap ends.
    pub end: f64,
    /// Pulses in the schedule.
    pub pulse_count: usize,
    /// Pulses the context accepted.
    pub scheduled: usize,
    /// Letters that keyed at least one element.
    pub letter_count: usize,
    /// Word separators.
    pub word_gaps: usize,
}

impl PlaybackHandle {
    /// Total schedule length in seconds.
    pub fn total_duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if every pulse reached the context.
    pub fn is_complete(&self) -> bool {
        self.scheduled == self.pulse_count
    }

    fn from_schedule(plan: &Schedule, scheduled: usize) -> Self {
        Self {
            start: plan.origin,
            end: plan.end,
            pulse_count: plan.pulse_count(),
            scheduled,
            letter_count: plan.letters,
            word_gaps: plan.word_gaps,
        }
    }
}

/// Schedules a Morse string on `context` and returns immediately.
///
/// An invalid config schedules nothing. The returned handle reflects the full
/// schedule either way, with [`scheduled`](PlaybackHandle::scheduled) counting
/// what the context actually took.
pub fn play(context: &mut dyn AudioContext, morse: &str, config: &PlayConfig) -> PlaybackHandle {
    let origin = context.current_time();
    let plan = schedule(morse, &config.keying, origin);

    if let Err(e) = config.validate() {
        warn!(code = e.code(), error = %e, "invalid play config; nothing scheduled");
        return PlaybackHandle::from_schedule(&plan, 0);
    }

    let tone = &config.tone;
    let envelope = KeyingEnvelope::new(tone.ramp_ms / 1000.0);
    let mut scheduled = 0;

    for pulse in &plan.pulses {
        let event = ToneEvent {
            start: pulse.start,
            stop: pulse.end(),
            frequency_hz: tone.frequency_hz,
            gain: tone.gain,
            waveform: tone.waveform,
            envelope,
        };
        match context.schedule(&event) {
            Ok(()) => scheduled += 1,
            Err(e) => {
                warn!(
                    code = e.code(),
                    error = %e,
                    scheduled,
                    remaining = plan.pulse_count() - scheduled,
                    "audio output refused a tone; playback truncated"
                );
                break;
            }
        }
    }

    debug!(
        pulses = plan.pulse_count(),
        scheduled,
        start = origin,
        duration = plan.total_duration(),
        "scheduled morse playback"
    );

    PlaybackHandle::from_schedule(&plan, scheduled)
}
