//! Keying envelope.
//!
//! A keyed tone is a rectangle in time. Switching the carrier on and off
//! abruptly produces audible clicks, so each pulse can be shaped with a short
//! linear rise and fall. A ramp of zero reproduces hard keying.

/// Linear rise/fall shaping for one pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyingEnvelope {
    /// Rise and fall time in seconds.
    pub ramp: f64,
}

impl KeyingEnvelope {
    /// Creates an envelope with equal rise and fall times.
    pub fn new(ramp: f64) -> Self {
        Self {
            ramp: ramp.max(0.0),
        }
    }

    /// Hard keying: full level for the whole pulse.
    pub fn hard() -> Self {
        Self { ramp: 0.0 }
    }

    /// Ramp length in samples for a pulse of `num_samples`, capped at half
    /// the pulse so rise and fall never overlap.
    pub fn ramp_samples(&self, num_samples: usize, sample_rate: f64) -> usize {
        let wanted = (self.ramp * sample_rate).round() as usize;
        wanted.min(num_samples / 2)
    }

    /// Level at sample `index` of a pulse `num_samples` long.
    pub fn level(&self, index: usize, num_samples: usize, ramp_samples: usize) -> f64 {
        if index >= num_samples {
            return 0.0;
        }
        if ramp_samples == 0 {
            return 1.0;
        }
        let rise = index as f64 / ramp_samples as f64;
        let fall = (num_samples - index) as f64 / ramp_samples as f64;
        rise.min(fall).min(1.0)
    }

    /// Generates the envelope curve for a pulse of fixed length.
    ///
    /// # Arguments
    /// * `num_samples` - Pulse length in samples
    /// * `sample_rate` - Audio sample rate
    ///
    /// # Returns
    /// Vector of envelope values (0.0 to 1.0)
    pub fn generate_fixed_duration(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        let ramp = self.ramp_samples(num_samples, sample_rate);
        (0..num_samples)
            .map(|i| self.level(i, num_samples, ramp))
            .collect()
    }
}

impl Default for KeyingEnvelope {
    fn default() -> Self {
        Self::hard()
    }
}
