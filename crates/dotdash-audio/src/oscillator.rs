//! Basic waveform generators.
//!
//! Phases are in radians. Every tone starts at phase zero, so a rendered
//! pulse always begins at a zero crossing for sine and triangle waves.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Tone waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Pure sine.
    #[default]
    Sine,
    /// 50% duty square.
    Square,
    /// Rising sawtooth.
    Sawtooth,
    /// Triangle.
    Triangle,
}

impl Waveform {
    /// All waveforms.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }

    /// Parses a lowercase waveform name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == name)
    }

    /// Evaluates the waveform at `phase` radians.
    pub fn sample(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => sine(phase),
            Waveform::Square => square(phase),
            Waveform::Sawtooth => sawtooth(phase),
            Waveform::Triangle => triangle(phase),
        }
    }
}

/// Tracks oscillator phase across samples.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator at phase zero.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the current phase and advances by one sample at `frequency`.
    pub fn advance(&mut self, frequency: f64) -> f64 {
        let current = self.phase;
        self.phase += TWO_PI * frequency / self.sample_rate;
        if self.phase >= TWO_PI {
            self.phase -= TWO_PI;
        }
        current
    }
}

/// Sine wave.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Square wave, high for the first half of the cycle.
#[inline]
pub fn square(phase: f64) -> f64 {
    if phase.rem_euclid(TWO_PI) < PI {
        1.0
    } else {
        -1.0
    }
}

/// Sawtooth rising from -1 to 1 over one cycle.
#[inline]
pub fn sawtooth(phase: f64) -> f64 {
    phase.rem_euclid(TWO_PI) / PI - 1.0
}

/// Triangle wave starting at zero and rising.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    let t = phase.rem_euclid(TWO_PI) / TWO_PI;
    if t < 0.25 {
        4.0 * t
    } else if t < 0.75 {
        2.0 - 4.0 * t
    } else {
        4.0 * t - 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_sine_points() {
        assert!(sine(0.0).abs() < EPS);
        assert!((sine(PI / 2.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_square_points() {
        assert_eq!(square(0.1), 1.0);
        assert_eq!(square(PI + 0.1), -1.0);
        assert_eq!(square(TWO_PI + 0.1), 1.0);
    }

    #[test]
    fn test_sawtooth_points() {
        assert!((sawtooth(0.0) + 1.0).abs() < EPS);
        assert!(sawtooth(PI).abs() < EPS);
    }

    #[test]
    fn test_triangle_points() {
        assert!(triangle(0.0).abs() < EPS);
        assert!((triangle(PI / 2.0) - 1.0).abs() < EPS);
        assert!(triangle(PI).abs() < EPS);
        assert!((triangle(1.5 * PI) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_waveforms_bounded() {
        for waveform in Waveform::ALL {
            for i in 0..1000 {
                let v = waveform.sample(i as f64 * 0.037);
                assert!((-1.0..=1.0).contains(&v), "{:?} out of range", waveform);
            }
        }
    }

    #[test]
    fn test_phase_accumulator_wraps() {
        // Quarter cycle per sample
        let mut acc = PhaseAccumulator::new(4.0);
        let phases: Vec<f64> = (0..5).map(|_| acc.advance(1.0)).collect();
        assert!(phases[0].abs() < EPS);
        assert!((phases[2] - PI).abs() < EPS);
        assert!(phases[4].abs() < 1e-9);
    }

    #[test]
    fn test_waveform_names() {
        for waveform in Waveform::ALL {
            assert_eq!(Waveform::parse(waveform.as_str()), Some(waveform));
        }
        assert_eq!(Waveform::parse("noise"), None);
        let json = serde_json::to_string(&Waveform::Sawtooth).unwrap();
        assert_eq!(json, "\"sawtooth\"");
    }
}
