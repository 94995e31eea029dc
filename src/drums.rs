//! Drum kit mapping from note names to LSDJ drum instrument labels
//! Based on the kit layout used by the LSDJ drum-kit ROMs (three-character labels)

use phrase_core::{pitch_from_name, PADDING_SENTINEL};
use thiserror::Error;

/// Placeholder for an empty drum or command column
pub const EMPTY_SLOT: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Unmapped instrument: {0}")]
    UnmappedInstrument(String),
}

/// Convert a General MIDI drum pitch to its LSDJ drum label
pub fn gm_drum_label(pitch: u8) -> Option<&'static str> {
    match pitch {
        // Kick and snare
        36 => Some("BD-"), // Bass Drum 1
        38 => Some("SD-"), // Acoustic Snare

        // Toms
        43 => Some("LT-"), // High Floor Tom
        45 => Some("MT-"), // Low Tom
        47 => Some("MT-"), // Low-Mid Tom
        48 => Some("HT-"), // Hi-Mid Tom
        50 => Some("HT-"), // High Tom

        // Hats and cymbals
        44 => Some("CHH"), // Pedal Hi-Hat
        49 => Some("CYM"), // Crash Cymbal 1
        51 => Some("RCY"), // Ride Cymbal 1
        52 => Some("RCY"), // Chinese Cymbal

        _ => None,
    }
}

/// Convert a note name (e.g. "C_3") to its drum label, if it is part of the kit
pub fn drum_label(note_name: &str) -> Option<&'static str> {
    pitch_from_name(note_name).and_then(gm_drum_label)
}

pub fn is_drum(note_name: &str) -> bool {
    drum_label(note_name).is_some()
}

/// Label for a column value; the empty slot passes through unchanged
pub fn column_label(value: &str) -> Result<&str, RenderError> {
    if value == EMPTY_SLOT {
        return Ok(value);
    }
    drum_label(value).ok_or_else(|| RenderError::UnmappedInstrument(value.to_string()))
}

/// Render one phrase row as `<hex index><drum 1>  <drum 2>  <command>`
///
/// Only the first two kit members of the row are shown. Notes outside the
/// kit are left out of the row.
pub fn render_row(index: usize, row: &[String]) -> Result<String, RenderError> {
    let mut drums = row.iter().map(String::as_str).filter(|name| is_drum(name));
    let drum_1 = column_label(drums.next().unwrap_or(EMPTY_SLOT))?;
    let drum_2 = column_label(drums.next().unwrap_or(EMPTY_SLOT))?;

    let cmd = row
        .iter()
        .map(String::as_str)
        .find(|&name| name == PADDING_SENTINEL)
        .unwrap_or(EMPTY_SLOT);

    Ok(format!("{:<4x}{:<3}  {:<3}  {:<3}", index, drum_1, drum_2, cmd))
}

/// Render every row of a phrase's notes
pub fn render_rows(notes: &[Vec<String>]) -> Result<Vec<String>, RenderError> {
    notes
        .iter()
        .enumerate()
        .map(|(index, row)| render_row(index, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrase_core::note_name;
    use proptest::prelude::*;

    fn row(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_common_drums() {
        assert_eq!(drum_label("C_3"), Some("BD-"));
        assert_eq!(drum_label("D_3"), Some("SD-"));
        assert_eq!(drum_label("Gs_3"), Some("CHH"));
        assert_eq!(drum_label("Cs_4"), Some("CYM"));
        assert_eq!(drum_label("Fs_3"), None);
    }

    #[test]
    fn test_pitch_table() {
        assert_eq!(gm_drum_label(36), Some("BD-"));
        assert_eq!(gm_drum_label(52), Some("RCY"));
        assert_eq!(gm_drum_label(42), None);
        assert_eq!(drum_label("H00"), None);
    }

    #[test]
    fn test_two_drums_blank_command() {
        let rendered = render_row(3, &row(&["C_3", "D_3"])).unwrap();
        assert_eq!(rendered, "3   BD-  SD-  ---");
    }

    #[test]
    fn test_unknown_notes_are_left_out() {
        let rendered = render_row(0, &row(&["Fs_3", "C_3", "C_5"])).unwrap();
        assert_eq!(rendered, "0   BD-  ---  ---");
    }

    #[test]
    fn test_only_first_two_drums_shown() {
        let rendered = render_row(11, &row(&["Gs_3", "C_3", "D_3"])).unwrap();
        assert_eq!(rendered, "b   CHH  BD-  ---");
    }

    #[test]
    fn test_padding_row() {
        let rendered = render_row(15, &row(&[PADDING_SENTINEL])).unwrap();
        assert_eq!(rendered, "f   ---  ---  H00");
    }

    #[test]
    fn test_unmapped_label_lookup() {
        assert_eq!(column_label("---"), Ok("---"));
        assert_eq!(
            column_label("Fs_3"),
            Err(RenderError::UnmappedInstrument("Fs_3".to_string()))
        );
    }

    #[test]
    fn test_sixteen_rows() {
        let mut notes = vec![row(&[]); 10];
        notes[0] = row(&["C_3"]);
        notes.resize(16, row(&[PADDING_SENTINEL]));

        let rows = render_rows(&notes).unwrap();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0], "0   BD-  ---  ---");
        assert_eq!(rows[9], "9   ---  ---  ---");
        assert_eq!(rows[10], "a   ---  ---  H00");
    }

    proptest! {
        #[test]
        fn rows_have_fixed_columns(
            index in 0usize..16,
            pitches in prop::collection::vec(0u8..128, 0..6),
            padded in any::<bool>(),
        ) {
            let mut names: Vec<String> = pitches.iter().map(|&p| note_name(p).to_string()).collect();
            if padded {
                names.push(PADDING_SENTINEL.to_string());
            }

            let rendered = render_row(index, &names).unwrap();
            prop_assert_eq!(rendered.len(), 17);
            let expected = format!("{:<4x}", index);
            prop_assert_eq!(&rendered[..4], expected.as_str());

            let expected: Vec<&str> = pitches
                .iter()
                .filter_map(|&p| gm_drum_label(p))
                .chain(std::iter::repeat(EMPTY_SLOT))
                .take(2)
                .collect();
            prop_assert_eq!(&rendered[4..7], expected[0]);
            prop_assert_eq!(&rendered[9..12], expected[1]);
            prop_assert_eq!(&rendered[14..], if padded { PADDING_SENTINEL } else { EMPTY_SLOT });
        }
    }
}
