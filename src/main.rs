use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;

use midivis::{MidiData, OutputFormatter};
use phrase_core::{build_phrases, LongBar, SegmentPolicy, UnevenSpan};

#[derive(Parser, Debug)]
#[command(name = "midivis")]
#[command(about = "Turn a .midi file into LSDJ tracker phrases", long_about = None)]
struct Args {
    /// Path to .midi file to process
    midi_file: PathBuf,

    /// Phrase whose note names are printed
    #[arg(long, default_value = "0")]
    notes_phrase: usize,

    /// Phrase rendered as drum rows
    #[arg(long, default_value = "1")]
    drums_phrase: usize,

    /// Track to read (the first track by default)
    #[arg(short, long, default_value = "0")]
    track: usize,

    /// What to do when a time signature does not fill whole bars
    #[arg(long, value_enum, default_value_t = UnevenBars::Reject)]
    uneven_bars: UnevenBars,

    /// What to do with bars of 32 or more sixteenth steps
    #[arg(long, value_enum, default_value_t = LongBars::Subdivide)]
    long_bars: LongBars,

    /// List every chain and phrase instead of rendering
    #[arg(long)]
    summary: bool,

    /// Print all phrases as JSON
    #[arg(long, conflicts_with = "summary")]
    json: bool,

    /// Suppress informational messages (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnevenBars {
    Reject,
    Truncate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LongBars {
    Subdivide,
    Reject,
}

impl Args {
    fn policy(&self) -> SegmentPolicy {
        SegmentPolicy {
            uneven_span: match self.uneven_bars {
                UnevenBars::Reject => UnevenSpan::Reject,
                UnevenBars::Truncate => UnevenSpan::Truncate,
            },
            long_bar: match self.long_bars {
                LongBars::Subdivide => LongBar::Subdivide,
                LongBars::Reject => LongBar::Reject,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !args.midi_file.exists() {
        anyhow::bail!("MIDI file not found: {}", args.midi_file.display());
    }
    info!("Processing MIDI file: {}", args.midi_file.display());

    let midi = MidiData::from_file(&args.midi_file, args.track)?;
    if midi.track_count > 1 && args.track == 0 && midi.track.notes.is_empty() {
        warn!(
            "Track 0 has no notes; this file has {} tracks, try --track",
            midi.track_count
        );
    }

    let segmentation = build_phrases(&midi.track, args.policy())
        .with_context(|| format!("Failed to segment {}", args.midi_file.display()))?;

    let formatter = OutputFormatter::new(args.notes_phrase, args.drums_phrase);
    let output = if args.json {
        formatter.build_output_json(&segmentation)?
    } else if args.summary {
        formatter.build_summary(&segmentation.phrases)
    } else {
        formatter.build_output(&segmentation.phrases)?
    };

    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["midivis", "song.mid"]).unwrap();

        assert_eq!(args.notes_phrase, 0);
        assert_eq!(args.drums_phrase, 1);
        assert_eq!(args.track, 0);
        assert_eq!(args.policy(), SegmentPolicy::default());
    }

    #[test]
    fn test_policy_flags() {
        let args = Args::try_parse_from([
            "midivis",
            "song.mid",
            "--uneven-bars",
            "truncate",
            "--long-bars",
            "reject",
        ])
        .unwrap();

        assert_eq!(
            args.policy(),
            SegmentPolicy {
                uneven_span: UnevenSpan::Truncate,
                long_bar: LongBar::Reject,
            }
        );
    }

    #[test]
    fn test_requires_path() {
        assert!(Args::try_parse_from(["midivis"]).is_err());
    }
}
