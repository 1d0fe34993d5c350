/// Raw MIDI channel message, as produced by a MIDI file or stream parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}

impl MidiEvent {
    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { channel, .. }
            | MidiEvent::NoteOff { channel, .. }
            | MidiEvent::ControlChange { channel, .. }
            | MidiEvent::PitchBend { channel, .. }
            | MidiEvent::ProgramChange { channel, .. } => channel,
        }
    }
}

/// A MIDI message stamped with its position in seconds from the start of
/// the track (the parser has already resolved ticks and tempo).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedMidiEvent {
    pub seconds: f64,
    pub event: MidiEvent,
}

impl TimedMidiEvent {
    pub fn new(seconds: f64, event: MidiEvent) -> Self {
        Self { seconds, event }
    }
}
