#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    NoteOn,
    NoteOff,
}

/// A single scheduled note event
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// Absolute position in samples from the start of playback
    pub timestamp: u64,
    pub kind: NoteKind,
    /// MIDI note number (0-127)
    pub pitch: u8,
    /// Normalised velocity (0.0-1.0). Ignored for note-off.
    pub velocity: f32,
}

impl NoteEvent {
    pub fn note_on(timestamp: u64, pitch: u8, velocity: f32) -> Self {
        Self {
            timestamp,
            kind: NoteKind::NoteOn,
            pitch,
            velocity,
        }
    }

    pub fn note_off(timestamp: u64, pitch: u8) -> Self {
        Self {
            timestamp,
            kind: NoteKind::NoteOff,
            pitch,
            velocity: 0.0,
        }
    }

    pub fn is_note_on(&self) -> bool {
        self.kind == NoteKind::NoteOn
    }
}
