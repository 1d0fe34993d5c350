//! Built-in demo score: the Piano Phase figure, played by two parts that
//! slowly drift apart.

use sinepoly::io::midi::{MidiEvent, TimedMidiEvent};

/// E4 F#4 B4 C#5 D5 F#4 E4 C#5 B4 F#4 D5 C#5
pub const FIGURE: [u8; 12] = [64, 66, 71, 73, 74, 66, 64, 73, 71, 66, 74, 73];

/// Seconds per note for the steady part
const STEP: f64 = 0.125;

/// The second part runs this much faster and sits an octave up
const DRIFT: f64 = 0.985;

const VELOCITY: u8 = 96;

/// Seconds-stamped MIDI for `repeats` passes of the figure in both parts,
/// in the shape a MIDI file parser hands over.
pub fn piano_phase(repeats: usize) -> Vec<TimedMidiEvent> {
    let notes = FIGURE.len() * repeats;
    let mut events = Vec::with_capacity(notes * 4);

    for (channel, step, transpose) in [(0u8, STEP, 0u8), (1, STEP * DRIFT, 12)] {
        for (i, &key) in FIGURE.iter().cycle().take(notes).enumerate() {
            let key = key + transpose;
            let start = i as f64 * step;

            events.push(TimedMidiEvent::new(
                start,
                MidiEvent::NoteOn {
                    channel,
                    key,
                    velocity: VELOCITY,
                },
            ));
            events.push(TimedMidiEvent::new(
                start + step * 0.8,
                MidiEvent::NoteOff {
                    channel,
                    key,
                    velocity: 0,
                },
            ));
        }
    }

    events
}
