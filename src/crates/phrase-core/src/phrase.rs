//! Phrases and chains: the tracker-facing view of a segmented track

use serde::{Deserialize, Serialize};

use crate::event::{NoteEvent, TimeSignature};

/// Rows in a tracker phrase
pub const PHRASE_LENGTH: usize = 16;

/// Phrases per chain
pub const CHAIN_LENGTH: usize = 10;

/// Command written into rows past the end of a short phrase
pub const PADDING_SENTINEL: &str = "H00";

/// One chunk of at most sixteen grid steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    step_count: usize,
    start_tick: u64,
    end_tick: u64,
    signature: TimeSignature,
    steps: Vec<(u64, Vec<NoteEvent>)>,
}

impl Phrase {
    pub fn new(
        step_count: usize,
        start_tick: u64,
        end_tick: u64,
        signature: TimeSignature,
        steps: Vec<(u64, Vec<NoteEvent>)>,
    ) -> Self {
        debug_assert!((1..=PHRASE_LENGTH).contains(&step_count));
        Phrase {
            step_count,
            start_tick,
            end_tick,
            signature,
            steps,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }

    pub fn end_tick(&self) -> u64 {
        self.end_tick
    }

    pub fn signature(&self) -> TimeSignature {
        self.signature
    }

    pub fn label(&self) -> String {
        self.signature.label()
    }

    /// Raw note events per step, in tick order
    pub fn steps(&self) -> &[(u64, Vec<NoteEvent>)] {
        &self.steps
    }

    /// Note names for every row of the phrase
    ///
    /// Always sixteen rows. Rows past the phrase's own steps hold only the
    /// padding sentinel.
    pub fn notes(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .steps
            .iter()
            .take(PHRASE_LENGTH)
            .map(|(_, notes)| notes.iter().map(|note| note.name().to_string()).collect())
            .collect();

        rows.resize_with(PHRASE_LENGTH, || vec![PADDING_SENTINEL.to_string()]);
        rows
    }

    pub fn is_silent(&self) -> bool {
        self.steps.iter().all(|(_, notes)| notes.is_empty())
    }
}

/// Ten consecutive phrases, for paging through a song
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<'a> {
    pub index: usize,
    pub phrases: &'a [Phrase],
}

impl Chain<'_> {
    /// Index of the chain's first phrase in the whole song
    pub fn first_phrase(&self) -> usize {
        self.index * CHAIN_LENGTH
    }
}

/// Split phrases into chains of ten (the last one may be shorter)
pub fn chains(phrases: &[Phrase]) -> Vec<Chain<'_>> {
    phrases
        .chunks(CHAIN_LENGTH)
        .enumerate()
        .map(|(index, phrases)| Chain { index, phrases })
        .collect()
}
