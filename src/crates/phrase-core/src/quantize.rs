//! Note quantizer: snaps note-ons onto the grid
//!
//! A note is kept only when the distance to the next note-on (or to the end of
//! track for the last note) is a whole number of grid steps. Anything else has
//! no clean step to live on and is dropped. The drop is intentional and is
//! reported through [`DroppedNote`] so callers can see what was excluded.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::{PhraseError, Result};
use crate::event::NoteEvent;
use crate::grid::Grid;

/// Why a note did not make it onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Hold length is not a whole number of steps
    UnalignedHold,
    /// Hold length is fine but the note itself sits between grid instants
    OffGrid,
    /// Note starts after the end-of-track marker
    PastEndOfTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedNote {
    pub note: NoteEvent,
    pub hold: u64,
    pub reason: DropReason,
}

/// Every grid instant mapped to the notes quantized onto it, in tick order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizedTrack {
    step: u64,
    steps: BTreeMap<u64, Vec<NoteEvent>>,
}

impl QuantizedTrack {
    /// Empty entry for each grid instant
    pub fn new(grid: &Grid) -> Self {
        QuantizedTrack {
            step: grid.step(),
            steps: grid.instants().iter().map(|&tick| (tick, Vec::new())).collect(),
        }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn notes_at(&self, tick: u64) -> Option<&[NoteEvent]> {
        self.steps.get(&tick).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &[NoteEvent])> {
        self.steps.iter().map(|(&tick, notes)| (tick, notes.as_slice()))
    }

    /// Notes at each instant of `[range.start, range.end)`, one entry per step
    ///
    /// Fails if any instant of the range is missing from the grid.
    pub fn slice(&self, range: Range<u64>) -> Result<Vec<(u64, Vec<NoteEvent>)>> {
        (range.start..range.end)
            .step_by(self.step as usize)
            .map(|tick| {
                self.steps
                    .get(&tick)
                    .map(|notes| (tick, notes.clone()))
                    .ok_or(PhraseError::StepOutsideGrid { tick })
            })
            .collect()
    }

    fn push(&mut self, note: NoteEvent) {
        if let Some(notes) = self.steps.get_mut(&note.tick) {
            notes.push(note);
        }
    }
}

/// Result of quantizing a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantization {
    pub track: QuantizedTrack,
    pub dropped: Vec<DroppedNote>,
}

impl Quantization {
    pub fn kept(&self) -> usize {
        self.track.iter().map(|(_, notes)| notes.len()).sum()
    }
}

/// Quantize note-ons (in tick order) against the grid
///
/// `end_tick` stands in as the successor of the last note.
pub fn quantize(grid: &Grid, notes: &[NoteEvent], end_tick: u64) -> Quantization {
    let step = grid.step();
    let mut track = QuantizedTrack::new(grid);
    let mut dropped = Vec::new();

    for (index, note) in notes.iter().enumerate() {
        let next_tick = notes.get(index + 1).map_or(end_tick, |next| next.tick);
        let hold = next_tick.saturating_sub(note.tick);

        let reason = if note.tick > end_tick {
            Some(DropReason::PastEndOfTrack)
        } else if hold % step != 0 {
            Some(DropReason::UnalignedHold)
        } else if !grid.contains(note.tick) {
            Some(DropReason::OffGrid)
        } else {
            track.push(*note);
            None
        };

        if let Some(reason) = reason {
            debug!(
                "Dropping {} at tick {} (hold {} ticks): {:?}",
                note.name(),
                note.tick,
                hold,
                reason
            );
            dropped.push(DroppedNote {
                note: *note,
                hold,
                reason,
            });
        }
    }

    let quantization = Quantization { track, dropped };
    info!(
        "Quantized {} of {} notes onto a {}-tick grid ({} dropped)",
        quantization.kept(),
        notes.len(),
        step,
        quantization.dropped.len()
    );
    quantization
}
