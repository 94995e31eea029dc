//! Bar segmenter: cuts the quantized track into phrases
//!
//! Each time signature is active from its own tick up to the next signature
//! (or the end of track). Its span is cut into whole bars, and every bar
//! becomes one phrase, or two when it is longer than a tracker phrase: a
//! 16-step chunk followed by the remainder.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{PhraseError, Result};
use crate::event::SignatureChange;
use crate::phrase::{Phrase, PHRASE_LENGTH};
use crate::quantize::QuantizedTrack;

/// What to do when a signature's span is not a whole number of bars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnevenSpan {
    /// Fail with [`PhraseError::UnevenSpan`]
    #[default]
    Reject,
    /// Keep the whole bars and discard the trailing partial bar
    Truncate,
}

/// What to do with bars that a single 16 + remainder split cannot express
///
/// That is bars of exactly 32, 48, ... steps (the remainder chunk would be
/// empty) and bars longer than 32 steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongBar {
    /// Cut into consecutive 16-step chunks followed by any remainder
    #[default]
    Subdivide,
    /// Fail with [`PhraseError::LongBar`]
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPolicy {
    pub uneven_span: UnevenSpan,
    pub long_bar: LongBar,
}

pub struct Segmenter {
    step: u64,
    policy: SegmentPolicy,
}

impl Segmenter {
    pub fn new(step: u64, policy: SegmentPolicy) -> Result<Self> {
        if step == 0 {
            return Err(PhraseError::ZeroStep);
        }
        Ok(Self { step, policy })
    }

    /// Cut the quantized track into phrases, in tick order
    ///
    /// `end_tick` closes the span of the last signature.
    pub fn segment(
        &self,
        signatures: &[SignatureChange],
        end_tick: u64,
        track: &QuantizedTrack,
    ) -> Result<Vec<Phrase>> {
        let first = signatures.first().ok_or(PhraseError::MissingTimeSignature)?;
        if first.tick > 0 {
            warn!(
                "First time signature starts at tick {}; ticks before it are not segmented",
                first.tick
            );
        }

        let mut phrases = Vec::new();

        for (index, change) in signatures.iter().enumerate() {
            let next_tick = signatures.get(index + 1).map_or(end_tick, |next| next.tick);
            if change.tick > end_tick {
                return Err(PhraseError::SignatureOrder {
                    tick: change.tick,
                    previous: end_tick,
                });
            }
            if next_tick < change.tick {
                return Err(PhraseError::SignatureOrder {
                    tick: next_tick,
                    previous: change.tick,
                });
            }

            let signature = change.signature;
            let steps_per_bar = signature.steps_per_bar().ok_or(PhraseError::UnsupportedSignature {
                numerator: signature.numerator,
                denominator: signature.denominator,
            })?;
            let chunks = self.chunk_layout(change, steps_per_bar)?;

            let bar_ticks = steps_per_bar as u64 * self.step;
            let span = next_tick - change.tick;
            let bar_count = span / bar_ticks;
            let leftover = span % bar_ticks;

            if leftover != 0 {
                match self.policy.uneven_span {
                    UnevenSpan::Reject => {
                        return Err(PhraseError::UnevenSpan {
                            label: signature.label(),
                            start: change.tick,
                            span,
                            bar_ticks,
                        });
                    }
                    UnevenSpan::Truncate => warn!(
                        "{} at tick {}: discarding {} ticks after the last whole bar",
                        signature, change.tick, leftover
                    ),
                }
            }

            debug!(
                "{} at tick {}: {} bars of {} steps as chunks {:?}",
                signature, change.tick, bar_count, steps_per_bar, chunks
            );

            for bar in 0..bar_count {
                let mut start_tick = change.tick + bar * bar_ticks;
                for &step_count in &chunks {
                    let chunk_end = start_tick + step_count as u64 * self.step;
                    let steps = track.slice(start_tick..chunk_end)?;
                    phrases.push(Phrase::new(step_count, start_tick, chunk_end, signature, steps));
                    start_tick = chunk_end;
                }
            }
        }

        Ok(phrases)
    }

    /// Step counts of the phrases one bar is cut into
    fn chunk_layout(&self, change: &SignatureChange, steps_per_bar: u32) -> Result<Vec<usize>> {
        let steps = steps_per_bar as usize;
        let remainder = steps % PHRASE_LENGTH;

        if steps <= PHRASE_LENGTH {
            return Ok(vec![steps]);
        }
        if steps < 2 * PHRASE_LENGTH && remainder > 0 {
            return Ok(vec![PHRASE_LENGTH, remainder]);
        }

        match self.policy.long_bar {
            LongBar::Reject => Err(PhraseError::LongBar {
                label: change.signature.label(),
                steps_per_bar,
            }),
            LongBar::Subdivide => {
                let mut chunks = vec![PHRASE_LENGTH; steps / PHRASE_LENGTH];
                if remainder > 0 {
                    chunks.push(remainder);
                }
                Ok(chunks)
            }
        }
    }
}
