//! End-to-end run over one decoded track: grid, quantization, segmentation

use log::info;

use crate::error::Result;
use crate::event::Track;
use crate::grid::{Grid, Resolution};
use crate::phrase::Phrase;
use crate::quantize::{quantize, DroppedNote};
use crate::segment::{SegmentPolicy, Segmenter};

/// Phrases built from a track, plus the notes that could not be placed
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub resolution: Resolution,
    pub phrases: Vec<Phrase>,
    pub dropped: Vec<DroppedNote>,
}

/// Run grid building, quantization and bar segmentation over one track
pub fn build_phrases(track: &Track, policy: SegmentPolicy) -> Result<Segmentation> {
    let resolution = Resolution::new(track.resolution)?;
    let grid = Grid::from_resolution(track.end_tick, resolution);
    let quantization = quantize(&grid, &track.notes, track.end_tick);

    let phrases = Segmenter::new(grid.step(), policy)?.segment(
        &track.signatures,
        track.end_tick,
        &quantization.track,
    )?;
    info!(
        "Segmented {} ticks into {} phrases",
        track.end_tick,
        phrases.len()
    );

    Ok(Segmentation {
        resolution,
        phrases,
        dropped: quantization.dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NoteEvent, SignatureChange};
    use crate::phrase::PADDING_SENTINEL;
    use crate::PhraseError;

    fn two_bar_track() -> Track {
        Track {
            resolution: 96,
            notes: vec![NoteEvent::new(0, 36)],
            signatures: vec![SignatureChange::new(0, 4, 4)],
            tempos: Vec::new(),
            end_tick: 768,
        }
    }

    #[test]
    fn test_two_bar_common_time() {
        let result = build_phrases(&two_bar_track(), SegmentPolicy::default()).unwrap();

        assert_eq!(result.resolution.sixteenth(), 24);
        assert_eq!(result.phrases.len(), 2);
        assert!(result.dropped.is_empty());

        let first = &result.phrases[0];
        assert_eq!(first.step_count(), 16);
        let notes = first.notes();
        assert_eq!(notes[0], vec!["C_3"]);
        assert!(notes[1..].iter().all(Vec::is_empty));
        assert!(result.phrases[1].is_silent());
    }

    #[test]
    fn test_short_bars_padded_through_pipeline() {
        let track = Track {
            signatures: vec![SignatureChange::new(0, 10, 16)],
            end_tick: 240,
            ..two_bar_track()
        };
        let result = build_phrases(&track, SegmentPolicy::default()).unwrap();
        let notes = result.phrases[0].notes();

        assert_eq!(result.phrases[0].step_count(), 10);
        assert_eq!(notes.len(), 16);
        assert!(notes[10..].iter().all(|row| row == &vec![PADDING_SENTINEL]));
    }

    #[test]
    fn test_bad_resolution() {
        let track = Track {
            resolution: 90,
            ..two_bar_track()
        };
        assert!(matches!(
            build_phrases(&track, SegmentPolicy::default()),
            Err(PhraseError::FractionalGrid { resolution: 90, .. })
        ));
    }
}
