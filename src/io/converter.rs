use crate::{
    io::midi::{MidiEvent, TimedMidiEvent},
    sequencing::{EventTimeline, NoteEvent},
};

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
pub fn midi_note_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}

/// MIDI velocity (0-127) to the 0.0-1.0 range used by voices.
pub fn velocity_to_unit(velocity: u8) -> f32 {
    velocity.min(127) as f32 / 127.0
}

/// Absolute sample position for a time in seconds, rounded to the nearest
/// sample. Negative times land on sample 0.
pub fn seconds_to_samples(seconds: f64, sample_rate: f64) -> u64 {
    (seconds * sample_rate).round().max(0.0) as u64
}

pub fn midi_to_note_event(timed: TimedMidiEvent, sample_rate: f64) -> Option<NoteEvent> {
    let timestamp = seconds_to_samples(timed.seconds, sample_rate);

    match timed.event {
        // Running-status convention: note-on at velocity 0 is a note-off
        MidiEvent::NoteOn { key, velocity: 0, .. } | MidiEvent::NoteOff { key, .. } => {
            Some(NoteEvent::note_off(timestamp, key))
        }
        MidiEvent::NoteOn { key, velocity, .. } => Some(NoteEvent::note_on(
            timestamp,
            key,
            velocity_to_unit(velocity),
        )),
        _ => None,
    }
}

/// Build a timeline from parsed MIDI messages.
///
/// Only note messages survive; controllers, pitch bend and program changes
/// have no effect on a sine voice. `channel_filter` keeps a single channel.
pub fn timeline_from_midi(
    events: &[TimedMidiEvent],
    sample_rate: f64,
    channel_filter: Option<u8>,
) -> EventTimeline {
    events
        .iter()
        .filter(|timed| channel_filter.map_or(true, |channel| timed.event.channel() == channel))
        .filter_map(|&timed| midi_to_note_event(timed, sample_rate))
        .collect()
}
