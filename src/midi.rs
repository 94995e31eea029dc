use anyhow::{bail, Context, Result};
use log::{debug, info};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use std::path::Path;

use phrase_core::{NoteEvent, SignatureChange, TempoChange, Track};

/// The decoded track the converter works on
pub struct MidiData {
    pub track: Track,
    pub track_count: usize,
}

impl MidiData {
    pub fn from_file(path: &Path, track_index: usize) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read MIDI file: {}", path.display()))?;

        Self::from_bytes(&data, track_index)
            .with_context(|| format!("Failed to decode {}", path.display()))
    }

    pub fn from_bytes(data: &[u8], track_index: usize) -> Result<Self> {
        let smf = Smf::parse(data).context("Failed to parse MIDI file")?;

        let resolution = match smf.header.timing {
            Timing::Metrical(tpb) => tpb.as_int() as u32,
            Timing::Timecode(fps, subframe) => bail!(
                "Timecode timing ({} fps, {} subframes) has no ticks per quarter note",
                fps.as_int(),
                subframe
            ),
        };

        let events = smf.tracks.get(track_index).with_context(|| {
            format!(
                "Track {} not found (file has {} tracks)",
                track_index,
                smf.tracks.len()
            )
        })?;

        let mut track = Track {
            resolution,
            ..Default::default()
        };
        let mut end_tick = None;
        let mut tick: u64 = 0;

        for event in events {
            tick += event.delta.as_int() as u64;

            match event.kind {
                // Velocity 0 is a note-off in running-status files
                TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn { key, vel },
                } if vel.as_int() > 0 => {
                    track.notes.push(NoteEvent {
                        tick,
                        pitch: key.as_int(),
                        velocity: vel.as_int(),
                        channel: channel.as_int(),
                    });
                }
                TrackEventKind::Meta(MetaMessage::TimeSignature(numerator, power, _, _)) => {
                    let denominator = 1u8
                        .checked_shl(power.into())
                        .with_context(|| {
                            format!("Invalid time signature denominator 2^{} at tick {}", power, tick)
                        })?;
                    track.signatures.push(SignatureChange::new(tick, numerator, denominator));
                }
                TrackEventKind::Meta(MetaMessage::Tempo(tempo)) => {
                    track.tempos.push(TempoChange {
                        tick,
                        micros_per_quarter: tempo.as_int(),
                    });
                }
                TrackEventKind::Meta(MetaMessage::EndOfTrack) => {
                    end_tick = Some(tick);
                }
                _ => {}
            }
        }

        track.end_tick = end_tick
            .with_context(|| format!("Track {} has no End of Track marker", track_index))?;
        if track.signatures.is_empty() {
            bail!("Track {} has no time signature events", track_index);
        }

        for tempo in &track.tempos {
            debug!("Tempo {:.1} BPM at tick {}", tempo.bpm(), tempo.tick);
        }
        info!(
            "Track {}: {} ticks per quarter, {} notes, {} time signatures, {} tempo changes, ends at tick {}",
            track_index,
            track.resolution,
            track.notes.len(),
            track.signatures.len(),
            track.tempos.len(),
            track.end_tick
        );

        Ok(MidiData {
            track,
            track_count: smf.tracks.len(),
        })
    }
}
