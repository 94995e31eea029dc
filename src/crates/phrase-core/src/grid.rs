//! Quantization grid built from the file's resolution
//!
//! All sub-divisions come from halving the quarter note, so the sixteenth-note
//! step is `resolution / 4` and only exists when the resolution divides evenly.

use serde::{Deserialize, Serialize};

use crate::error::{PhraseError, Result};

/// Halvings from a quarter note down to the sixteenth-note grid
const SIXTEENTH_HALVINGS: u32 = 2;

/// Ticks per quarter note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution(u32);

impl Resolution {
    /// Validate a resolution for the sixteenth-note grid
    pub fn new(ticks_per_quarter: u32) -> Result<Self> {
        if ticks_per_quarter == 0 {
            return Err(PhraseError::ZeroResolution);
        }
        let divisor = 1 << SIXTEENTH_HALVINGS;
        if ticks_per_quarter % divisor != 0 {
            return Err(PhraseError::FractionalGrid {
                resolution: ticks_per_quarter,
                divisor,
            });
        }
        Ok(Resolution(ticks_per_quarter))
    }

    pub fn quarter(&self) -> u64 {
        self.0 as u64
    }

    pub fn eighth(&self) -> u64 {
        self.quarter() / 2
    }

    /// The grid step used everywhere in the engine
    pub fn sixteenth(&self) -> u64 {
        self.eighth() / 2
    }

    /// Only exact when the resolution also survives a third halving
    pub fn thirty_second(&self) -> Option<u64> {
        if self.sixteenth() % 2 == 0 {
            Some(self.sixteenth() / 2)
        } else {
            None
        }
    }
}

/// Ordered instants `0, step, 2*step, ...` up to and including the end tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    step: u64,
    end_tick: u64,
    instants: Vec<u64>,
}

impl Grid {
    /// Build the grid for a track ending at `end_tick`
    pub fn new(end_tick: u64, step: u64) -> Result<Self> {
        if step == 0 {
            return Err(PhraseError::ZeroStep);
        }
        Ok(Self::build(end_tick, step))
    }

    /// Sixteenth-note grid; a validated resolution always has a non-zero step
    pub fn from_resolution(end_tick: u64, resolution: Resolution) -> Self {
        Self::build(end_tick, resolution.sixteenth())
    }

    fn build(end_tick: u64, step: u64) -> Self {
        let instants = (0..=end_tick).step_by(step as usize).collect();
        Grid {
            step,
            end_tick,
            instants,
        }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn end_tick(&self) -> u64 {
        self.end_tick
    }

    pub fn instants(&self) -> &[u64] {
        &self.instants
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Last instant, never past the end tick
    pub fn last(&self) -> u64 {
        self.instants.last().copied().unwrap_or(0)
    }

    pub fn contains(&self, tick: u64) -> bool {
        tick <= self.end_tick && tick % self.step == 0
    }
}
