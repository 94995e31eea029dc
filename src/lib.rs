//! MIDI to tracker phrase converter library
//!
//! Reads a Standard MIDI File, cuts its first track into LSDJ-style phrases
//! with `phrase_core`, and renders phrases as drum rows.

pub mod drums;
pub mod midi;
pub mod output;

// Re-export main types for convenience
pub use drums::{render_rows, RenderError};
pub use midi::MidiData;
pub use output::OutputFormatter;
