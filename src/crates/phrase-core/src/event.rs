//! Absolute-tick event records read from a decoded track
//!
//! These are the only inputs the engine needs. Decoding the container format
//! into them is the job of the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::note::note_name;

/// A note-on at an absolute tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub tick: u64,
    pub pitch: u8,
    pub velocity: u8,
    pub channel: u8,
}

impl NoteEvent {
    pub fn new(tick: u64, pitch: u8) -> Self {
        NoteEvent {
            tick,
            pitch,
            velocity: 100,
            channel: 9,
        }
    }

    /// Pitch name such as `C_3` or `Gs_3`
    pub fn name(&self) -> &'static str {
        note_name(self.pitch)
    }
}

/// A time signature as written in the file (denominator already expanded, so 6/8 is `6, 8`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSignature {
    pub numerator: u8,
    pub denominator: u8,
}

impl TimeSignature {
    pub fn new(numerator: u8, denominator: u8) -> Self {
        TimeSignature {
            numerator,
            denominator,
        }
    }

    /// Sixteenth steps per bar, if the signature lands on whole steps
    pub fn steps_per_bar(&self) -> Option<u32> {
        let numerator = self.numerator as u32;
        let denominator = self.denominator as u32;
        if numerator == 0 || denominator == 0 || (numerator * 16) % denominator != 0 {
            return None;
        }
        Some(numerator * 16 / denominator)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A time signature change at an absolute tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureChange {
    pub tick: u64,
    pub signature: TimeSignature,
}

impl SignatureChange {
    pub fn new(tick: u64, numerator: u8, denominator: u8) -> Self {
        SignatureChange {
            tick,
            signature: TimeSignature::new(numerator, denominator),
        }
    }
}

/// A tempo marker. Read and reported, never used for timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoChange {
    pub tick: u64,
    pub micros_per_quarter: u32,
}

impl TempoChange {
    pub fn bpm(&self) -> f64 {
        60_000_000.0 / self.micros_per_quarter as f64
    }
}

/// Everything the engine reads from one decoded track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Ticks per quarter note
    pub resolution: u32,
    pub notes: Vec<NoteEvent>,
    pub signatures: Vec<SignatureChange>,
    pub tempos: Vec<TempoChange>,
    pub end_tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_per_bar() {
        assert_eq!(TimeSignature::new(4, 4).steps_per_bar(), Some(16));
        assert_eq!(TimeSignature::new(5, 4).steps_per_bar(), Some(20));
        assert_eq!(TimeSignature::new(6, 8).steps_per_bar(), Some(12));
        assert_eq!(TimeSignature::new(7, 16).steps_per_bar(), Some(7));
        assert_eq!(TimeSignature::new(3, 32).steps_per_bar(), None);
        assert_eq!(TimeSignature::new(4, 32).steps_per_bar(), Some(2));
        assert_eq!(TimeSignature::new(0, 4).steps_per_bar(), None);
    }

    #[test]
    fn test_signature_label() {
        assert_eq!(TimeSignature::new(5, 4).label(), "5/4");
        assert_eq!(SignatureChange::new(0, 6, 8).signature.to_string(), "6/8");
    }

    #[test]
    fn test_tempo_bpm() {
        let tempo = TempoChange {
            tick: 0,
            micros_per_quarter: 500_000,
        };
        assert_eq!(tempo.bpm(), 120.0);
    }
}
