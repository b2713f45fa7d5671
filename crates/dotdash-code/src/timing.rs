//! Keying schedule: turning a Morse string into timed pulses.
//!
//! All durations derive from a single unit:
//!
//! | Element              | Units |
//! |----------------------|-------|
//! | dot                  | 1     |
//! | dash                 | 3     |
//! | gap inside a letter  | 1     |
//! | gap between letters  | 3     |
//! | word separator (`/`) | 7     |
//!
//! The scheduler walks the string with an integer unit cursor, so the total
//! length of a schedule is exact regardless of the unit size.

use serde::{Deserialize, Serialize};

use crate::error::KeyingError;
use crate::table::{LETTER_SEPARATOR, WORD_SEPARATOR};

/// Units in a dot.
pub const DOT_UNITS: u64 = 1;
/// Units in a dash.
pub const DASH_UNITS: u64 = 3;
/// Silence between the elements of one letter.
pub const SYMBOL_GAP_UNITS: u64 = 1;
/// Silence between letters.
pub const LETTER_GAP_UNITS: u64 = 3;
/// Silence produced by a word separator token.
pub const WORD_GAP_UNITS: u64 = 7;

/// Default unit length in milliseconds.
pub const DEFAULT_UNIT_MS: f64 = 60.0;
/// Longest accepted unit in milliseconds (0.12 wpm).
pub const MAX_UNIT_MS: f64 = 10_000.0;

/// A keyed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// Short tone (`.`).
    Dot,
    /// Long tone (`-`).
    Dash,
}

impl Element {
    /// Parses a Morse symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Element::Dot),
            '-' => Some(Element::Dash),
            _ => None,
        }
    }

    /// Length in units.
    pub fn units(self) -> u64 {
        match self {
            Element::Dot => DOT_UNITS,
            Element::Dash => DASH_UNITS,
        }
    }
}

/// Timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keying {
    /// Base unit (one dot) in milliseconds.
    pub unit_ms: f64,
}

impl Default for Keying {
    fn default() -> Self {
        Self {
            unit_ms: DEFAULT_UNIT_MS,
        }
    }
}

impl Keying {
    /// Creates a validated keying configuration.
    pub fn new(unit_ms: f64) -> Result<Self, KeyingError> {
        let keying = Self { unit_ms };
        keying.validate()?;
        Ok(keying)
    }

    /// Derives the unit from a words-per-minute speed using the PARIS
    /// standard word of 50 units.
    pub fn from_wpm(wpm: f64) -> Result<Self, KeyingError> {
        Self::new(1200.0 / wpm)
    }

    /// Checks that the unit is positive and at most [`MAX_UNIT_MS`].
    pub fn validate(&self) -> Result<(), KeyingError> {
        if !(self.unit_ms > 0.0 && self.unit_ms <= MAX_UNIT_MS) {
            return Err(KeyingError::InvalidUnit {
                unit_ms: self.unit_ms,
            });
        }
        Ok(())
    }

    /// Unit length in seconds.
    pub fn unit_seconds(&self) -> f64 {
        self.unit_ms / 1000.0
    }

    /// Converts a unit count to seconds.
    pub fn seconds(&self, units: u64) -> f64 {
        units as f64 * self.unit_seconds()
    }

    /// Duration of an element in seconds.
    pub fn duration_of(&self, element: Element) -> f64 {
        self.seconds(element.units())
    }

    /// Length of a Morse string in units, computed from token counts.
    ///
    /// Matches [`schedule`] for strings whose word separators sit between
    /// letters. A trailing `/` is followed by a letter gap in the scheduler
    /// but not in this formula.
    pub fn closed_form_units(&self, morse: &str) -> u64 {
        if morse.is_empty() {
            return 0;
        }

        let tokens: Vec<&str> = morse.split(LETTER_SEPARATOR).collect();
        let words = tokens.iter().filter(|t| **t == WORD_SEPARATOR).count() as i64;
        let letters = tokens.len() as i64 - words;
        let elements: Vec<Element> = tokens
            .iter()
            .filter(|t| **t != WORD_SEPARATOR)
            .flat_map(|t| t.chars().filter_map(Element::from_symbol))
            .collect();
        let keyed: i64 = elements.iter().map(|e| e.units() as i64).sum();
        let symbols = elements.len() as i64;

        let total = keyed
            + (symbols - letters) * SYMBOL_GAP_UNITS as i64
            + (tokens.len() as i64 - 1 - words) * LETTER_GAP_UNITS as i64
            + words * WORD_GAP_UNITS as i64;
        total.max(0) as u64
    }

    /// Closed-form duration in seconds.
    pub fn closed_form_duration(&self, morse: &str) -> f64 {
        self.seconds(self.closed_form_units(morse))
    }
}

/// One scheduled tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    /// Start time in seconds on the scheduling clock.
    pub start: f64,
    /// Tone length in seconds.
    pub duration: f64,
    /// Which element this pulse keys.
    pub element: Element,
    /// Start offset from the schedule origin, in units.
    pub offset_units: u64,
}

impl Pulse {
    /// Time at which the tone stops.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A complete one-shot keying plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Clock time the schedule starts at.
    pub origin: f64,
    /// Clock time after the last gap.
    pub end: f64,
    /// Total schedule length in units.
    pub total_units: u64,
    /// Tones in start order.
    pub pulses: Vec<Pulse>,
    /// Tokens that keyed at least one element.
    pub letters: usize,
    /// Word separator tokens encountered.
    pub word_gaps: usize,
}

impl Schedule {
    /// Schedule length in seconds.
    pub fn total_duration(&self) -> f64 {
        self.end - self.origin
    }

    /// Number of tones.
    pub fn pulse_count(&self) -> usize {
        self.pulses.len()
    }

    /// Returns true if nothing would sound.
    pub fn is_silent(&self) -> bool {
        self.pulses.is_empty()
    }
}

/// Builds the keying schedule for a Morse string starting at `origin`.
///
/// Tokens are split on single spaces. A `/` token advances by a word gap and
/// nothing else. Every other token keys its `.` and `-` symbols in order with
/// a symbol gap between them, then a letter gap follows unless it is the last
/// token. Symbols other than `.` and `-` are skipped.
pub fn schedule(morse: &str, keying: &Keying, origin: f64) -> Schedule {
    let mut pulses = Vec::new();
    let mut cursor: u64 = 0;
    let mut letters = 0;
    let mut word_gaps = 0;

    if morse.is_empty() {
        return Schedule {
            origin,
            end: origin,
            total_units: 0,
            pulses,
            letters,
            word_gaps,
        };
    }

    let tokens: Vec<&str> = morse.split(LETTER_SEPARATOR).collect();
    let last = tokens.len() - 1;

    for (index, token) in tokens.iter().enumerate() {
        if *token == WORD_SEPARATOR {
            cursor += WORD_GAP_UNITS;
            word_gaps += 1;
            continue;
        }

        let elements: Vec<Element> = token.chars().filter_map(Element::from_symbol).collect();
        if !elements.is_empty() {
            letters += 1;
        }

        for (i, element) in elements.iter().enumerate() {
            pulses.push(Pulse {
                start: origin + keying.seconds(cursor),
                duration: keying.duration_of(*element),
                element: *element,
                offset_units: cursor,
            });
            cursor += element.units();
            if i + 1 < elements.len() {
                cursor += SYMBOL_GAP_UNITS;
            }
        }

        if index < last {
            cursor += LETTER_GAP_UNITS;
        }
    }

    Schedule {
        origin,
        end: origin + keying.seconds(cursor),
        total_units: cursor,
        pulses,
        letters,
        word_gaps,
    }
}
