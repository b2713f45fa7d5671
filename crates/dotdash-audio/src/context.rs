//! Audio contexts: clock-bearing targets that accept scheduled tones.
//!
//! A context owns the clock that playback schedules against. [`play`] reads
//! the clock once, then submits one [`ToneEvent`] per pulse and returns. The
//! context decides when and how the tones actually sound.
//!
//! [`play`]: crate::player::play

use crate::error::{AudioError, AudioResult};
use crate::envelope::KeyingEnvelope;
use crate::oscillator::{PhaseAccumulator, Waveform};
use crate::wav::WavResult;

/// Lowest sample rate an offline context accepts.
pub const MIN_SAMPLE_RATE: u32 = 8_000;
/// Highest sample rate an offline context accepts.
pub const MAX_SAMPLE_RATE: u32 = 192_000;
/// Default render sample rate.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// A single tone to sound between `start` and `stop` on the context clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    /// Start time in seconds.
    pub start: f64,
    /// Stop time in seconds.
    pub stop: f64,
    /// Carrier frequency in Hz.
    pub frequency_hz: f64,
    /// Amplitude.
    pub gain: f64,
    /// Carrier waveform.
    pub waveform: Waveform,
    /// Rise/fall shaping.
    pub envelope: KeyingEnvelope,
}

impl ToneEvent {
    /// Tone length in seconds.
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}

/// A clock-bearing audio sink.
pub trait AudioContext {
    /// Sample rate of the output.
    fn sample_rate(&self) -> u32;

    /// Current clock time in seconds.
    fn current_time(&self) -> f64;

    /// Schedules a tone. Returns an error if the output cannot take it.
    fn schedule(&mut self, tone: &ToneEvent) -> AudioResult<()>;
}

/// A context that renders scheduled tones into a sample buffer.
///
/// The clock only moves when [`advance`](Self::advance) or
/// [`advance_to`](Self::advance_to) is called, so back-to-back playbacks
/// without advancing overlap, just as they would on a live device.
#[derive(Debug, Clone)]
pub struct OfflineContext {
    sample_rate: u32,
    clock: f64,
    events: Vec<ToneEvent>,
}

impl OfflineContext {
    /// Creates a context at clock zero.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            clock: 0.0,
            events: Vec::new(),
        })
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.clock += seconds;
        }
    }

    /// Moves the clock to `time` if it is later than the current time.
    pub fn advance_to(&mut self, time: f64) {
        if time > self.clock {
            self.clock = time;
        }
    }

    /// Tones scheduled so far.
    pub fn events(&self) -> &[ToneEvent] {
        &self.events
    }

    /// Length of the rendered buffer in seconds: the later of the clock and
    /// the last tone's stop time.
    pub fn horizon(&self) -> f64 {
        self.events
            .iter()
            .map(|e| e.stop)
            .fold(self.clock, f64::max)
    }

    /// Mixes every scheduled tone into a mono buffer.
    ///
    /// Overlapping tones are summed; values past full scale are clipped at
    /// PCM conversion.
    pub fn render(&self) -> Vec<f64> {
        let rate = self.sample_rate as f64;
        let total = to_sample(self.horizon(), rate);
        let mut buffer = vec![0.0; total];

        for event in &self.events {
            let first = to_sample(event.start, rate);
            let last = to_sample(event.stop, rate).min(total);
            if last <= first {
                continue;
            }

            let len = last - first;
            let envelope = event.envelope.generate_fixed_duration(len, rate);
            let mut phase = PhaseAccumulator::new(rate);
            for (slot, level) in buffer[first..last].iter_mut().zip(envelope) {
                let p = phase.advance(event.frequency_hz);
                *slot += event.gain * level * event.waveform.sample(p);
            }
        }

        buffer
    }

    /// Renders to a WAV file in memory.
    pub fn render_wav(&self) -> WavResult {
        WavResult::from_mono(&self.render(), self.sample_rate)
    }
}

impl AudioContext for OfflineContext {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn current_time(&self) -> f64 {
        self.clock
    }

    fn schedule(&mut self, tone: &ToneEvent) -> AudioResult<()> {
        let nyquist = self.sample_rate as f64 / 2.0;
        if tone.frequency_hz >= nyquist {
            return Err(AudioError::InvalidFrequency {
                freq: tone.frequency_hz,
            });
        }
        if !(tone.start.is_finite() && tone.stop.is_finite()) || tone.stop < tone.start {
            return Err(AudioError::invalid_param(
                "tone",
                format!("bad interval {}..{}", tone.start, tone.stop),
            ));
        }
        self.events.push(*tone);
        Ok(())
    }
}

/// A context that accepts and discards every tone.
#[derive(Debug, Clone, Default)]
pub struct NullContext {
    accepted: usize,
}

impl NullContext {
    /// Creates a null context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tones accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl AudioContext for NullContext {
    fn sample_rate(&self) -> u32 {
        DEFAULT_SAMPLE_RATE
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn schedule(&mut self, _tone: &ToneEvent) -> AudioResult<()> {
        self.accepted += 1;
        Ok(())
    }
}

fn to_sample(time: f64, rate: f64) -> usize {
    (time * rate).round().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(start: f64, stop: f64) -> ToneEvent {
        ToneEvent {
            start,
            stop,
            frequency_hz: 1000.0,
            gain: 0.5,
            waveform: Waveform::Square,
            envelope: KeyingEnvelope::hard(),
        }
    }

    #[test]
    fn test_sample_rate_bounds() {
        assert!(OfflineContext::new(44_100).is_ok());
        assert!(OfflineContext::new(8_000).is_ok());
        assert!(matches!(
            OfflineContext::new(0),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));
        assert!(OfflineContext::new(400_000).is_err());
    }

    #[test]
    fn test_clock_only_moves_forward() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        ctx.advance(1.5);
        ctx.advance(-1.0);
        assert_eq!(ctx.current_time(), 1.5);
        ctx.advance_to(1.0);
        assert_eq!(ctx.current_time(), 1.5);
        ctx.advance_to(2.0);
        assert_eq!(ctx.current_time(), 2.0);
    }

    #[test]
    fn test_render_places_tone() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        ctx.schedule(&tone(0.01, 0.02)).unwrap();

        let samples = ctx.render();
        assert_eq!(samples.len(), 160);
        assert!(samples[..80].iter().all(|&s| s == 0.0));
        assert!(samples[80..160].iter().all(|&s| s.abs() == 0.5));
    }

    #[test]
    fn test_overlapping_tones_sum() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        ctx.schedule(&tone(0.0, 0.01)).unwrap();
        ctx.schedule(&tone(0.0, 0.01)).unwrap();

        let samples = ctx.render();
        assert_eq!(samples[0], 1.0);
    }

    #[test]
    fn test_horizon_includes_clock() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        ctx.schedule(&tone(0.0, 0.01)).unwrap();
        ctx.advance_to(0.5);
        assert_eq!(ctx.horizon(), 0.5);
        assert_eq!(ctx.render().len(), 4000);
    }

    #[test]
    fn test_rejects_tone_above_nyquist() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        let mut high = tone(0.0, 0.1);
        high.frequency_hz = 4_000.0;
        assert!(matches!(
            ctx.schedule(&high),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn test_rejects_backwards_interval() {
        let mut ctx = OfflineContext::new(8_000).unwrap();
        assert!(ctx.schedule(&tone(0.2, 0.1)).is_err());
    }

    #[test]
    fn test_null_context_counts() {
        let mut ctx = NullContext::new();
        ctx.schedule(&tone(0.0, 0.1)).unwrap();
        ctx.schedule(&tone(0.2, 0.3)).unwrap();
        assert_eq!(ctx.accepted(), 2);
        assert_eq!(ctx.current_time(), 0.0);
    }
}
