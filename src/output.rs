//! Text, summary and JSON reports for a segmented track

use anyhow::{Context, Result};
use serde::Serialize;

use crate::drums::render_rows;
use phrase_core::{chains, Phrase, Segmentation, CHAIN_LENGTH};

pub struct OutputFormatter {
    notes_phrase: usize,
    drums_phrase: usize,
}

impl OutputFormatter {
    pub fn new(notes_phrase: usize, drums_phrase: usize) -> Self {
        Self {
            notes_phrase,
            drums_phrase,
        }
    }

    /// Note names of one phrase followed by the drum rows of another
    pub fn build_output(&self, phrases: &[Phrase]) -> Result<String> {
        let notes = self.format_notes(select(phrases, self.notes_phrase)?);
        let drums = self.format_drums(select(phrases, self.drums_phrase)?)?;

        Ok(format!("{}\n{}", notes, drums))
    }

    pub fn format_notes(&self, phrase: &Phrase) -> String {
        format!("{:?}", phrase.notes())
    }

    pub fn format_drums(&self, phrase: &Phrase) -> Result<String> {
        let rows = render_rows(&phrase.notes())?;
        Ok(rows.join("\n"))
    }

    /// One block per chain listing its phrases
    pub fn build_summary(&self, phrases: &[Phrase]) -> String {
        let mut output = Vec::new();

        for chain in chains(phrases) {
            output.push(format!("Chain {:02X}", chain.index));
            for (offset, phrase) in chain.phrases.iter().enumerate() {
                output.push(format!(
                    "  {:02X}  {:<5} {:>2} steps  ticks {}..{}",
                    chain.first_phrase() + offset,
                    phrase.label(),
                    phrase.step_count(),
                    phrase.start_tick(),
                    phrase.end_tick()
                ));
            }
        }

        output.join("\n")
    }

    /// Build JSON output of every phrase
    pub fn build_output_json(&self, segmentation: &Segmentation) -> Result<String> {
        #[derive(Serialize)]
        struct JsonPhrase {
            index: usize,
            chain: usize,
            signature: String,
            step_count: usize,
            start_tick: u64,
            end_tick: u64,
            notes: Vec<Vec<String>>,
        }

        #[derive(Serialize)]
        struct JsonOutput {
            resolution: u64,
            step: u64,
            dropped_notes: usize,
            chains: usize,
            phrases: Vec<JsonPhrase>,
        }

        let phrases = segmentation
            .phrases
            .iter()
            .enumerate()
            .map(|(index, phrase)| JsonPhrase {
                index,
                chain: index / CHAIN_LENGTH,
                signature: phrase.label(),
                step_count: phrase.step_count(),
                start_tick: phrase.start_tick(),
                end_tick: phrase.end_tick(),
                notes: phrase.notes(),
            })
            .collect();

        let output = JsonOutput {
            resolution: segmentation.resolution.quarter(),
            step: segmentation.resolution.sixteenth(),
            dropped_notes: segmentation.dropped.len(),
            chains: chains(&segmentation.phrases).len(),
            phrases,
        };

        serde_json::to_string_pretty(&output).context("Failed to serialize phrases to JSON")
    }
}

fn select(phrases: &[Phrase], index: usize) -> Result<&Phrase> {
    phrases.get(index).with_context(|| {
        format!(
            "Phrase {} requested but the track only has {} phrases",
            index,
            phrases.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::tests::drum_file;
    use crate::midi::MidiData;
    use phrase_core::{build_phrases, SegmentPolicy};

    fn segmentation() -> Segmentation {
        let midi = MidiData::from_bytes(&drum_file(), 0).unwrap();
        build_phrases(&midi.track, SegmentPolicy::default()).unwrap()
    }

    #[test]
    fn test_text_output() {
        let segmentation = segmentation();
        let output = OutputFormatter::new(0, 1)
            .build_output(&segmentation.phrases)
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 17);
        assert!(lines[0].starts_with("[[\"C_3\"], [], "));
        assert_eq!(lines[1], "0   ---  ---  ---");
        assert_eq!(lines[2], "1   SD-  CHH  ---");
        assert_eq!(lines[16], "f   ---  ---  ---");
    }

    #[test]
    fn test_first_phrase_drums() {
        let segmentation = segmentation();
        let drums = OutputFormatter::new(0, 0)
            .format_drums(&segmentation.phrases[0])
            .unwrap();
        let rows: Vec<&str> = drums.lines().collect();

        assert_eq!(rows[0], "0   BD-  ---  ---");
        assert!(rows[1..].iter().all(|row| row.ends_with("---  ---  ---")));
    }

    #[test]
    fn test_phrase_out_of_range() {
        let segmentation = segmentation();
        let err = OutputFormatter::new(0, 5)
            .build_output(&segmentation.phrases)
            .unwrap_err();
        assert!(err.to_string().contains("only has 2 phrases"));
    }

    #[test]
    fn test_summary() {
        let segmentation = segmentation();
        let summary = OutputFormatter::new(0, 1).build_summary(&segmentation.phrases);

        assert_eq!(
            summary,
            "Chain 00\n  00  4/4   16 steps  ticks 0..384\n  01  4/4   16 steps  ticks 384..768"
        );
    }

    #[test]
    fn test_json_output() {
        let segmentation = segmentation();
        let json = OutputFormatter::new(0, 1)
            .build_output_json(&segmentation)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["step"], 24);
        assert_eq!(value["chains"], 1);
        assert_eq!(value["phrases"][1]["start_tick"], 384);
        assert_eq!(value["phrases"][1]["notes"][1][0], "D_3");
    }
}
