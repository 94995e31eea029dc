//! Grid quantization and bar segmentation for tracker phrases
//!
//! This crate turns an absolute-tick note performance into the fixed-length
//! phrases of a step-sequencer style tracker: sixteen rows per phrase, ten
//! phrases per chain.
//!
//! # Examples
//!
//! ```
//! use phrase_core::{build_phrases, NoteEvent, SegmentPolicy, SignatureChange, Track};
//!
//! let track = Track {
//!     resolution: 96,
//!     notes: vec![NoteEvent::new(0, 36)],
//!     signatures: vec![SignatureChange::new(0, 4, 4)],
//!     tempos: vec![],
//!     end_tick: 768,
//! };
//!
//! let segmentation = build_phrases(&track, SegmentPolicy::default()).unwrap();
//! assert_eq!(segmentation.phrases.len(), 2);
//! assert_eq!(segmentation.phrases[0].notes()[0], vec!["C_3"]);
//! ```
//!
//! # Main Components
//!
//! - **Grid**: sixteenth-note instants from tick 0 to the end of track
//! - **quantize**: snaps note-ons onto the grid, dropping unaligned ones
//! - **Segmenter**: walks time signatures and cuts bars into phrases
//! - **Phrase** / **Chain**: the tracker-facing result

pub mod error;
pub mod event;
pub mod grid;
pub mod note;
pub mod phrase;
pub mod pipeline;
pub mod quantize;
pub mod segment;

pub use error::{PhraseError, Result};
pub use event::{NoteEvent, SignatureChange, TempoChange, TimeSignature, Track};
pub use grid::{Grid, Resolution};
pub use note::{note_name, pitch_from_name};
pub use phrase::{chains, Chain, Phrase, CHAIN_LENGTH, PADDING_SENTINEL, PHRASE_LENGTH};
pub use pipeline::{build_phrases, Segmentation};
pub use quantize::{quantize, DropReason, DroppedNote, Quantization, QuantizedTrack};
pub use segment::{LongBar, SegmentPolicy, Segmenter, UnevenSpan};
