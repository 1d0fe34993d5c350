use crate::{
    io::Accumulator,
    synth::voice::{Voice, VoiceParams},
};

/// Highest valid MIDI note number
const MAX_PITCH: u8 = 127;

/// Fixed set of voices. Voices are created once and reset in place, so
/// nothing here allocates after construction.
pub struct VoicePool {
    voices: Vec<Voice>,
}

impl VoicePool {
    pub fn new(polyphony: usize, params: VoiceParams) -> Self {
        let voices = (0..polyphony.max(1)).map(|_| Voice::new(params)).collect();
        Self { voices }
    }

    /// Start a note and return the slot that plays it.
    ///
    /// Slot choice: a voice already assigned to `pitch` is retriggered;
    /// otherwise the first idle voice; otherwise slot 0 is stolen.
    /// Pitches above 127 are ignored.
    pub fn note_on(&mut self, pitch: u8, velocity: f32, sample_rate: f64) -> Option<usize> {
        if pitch > MAX_PITCH {
            return None;
        }

        let slot = self
            .voices
            .iter()
            .position(|v| v.pitch() == Some(pitch))
            .or_else(|| self.voices.iter().position(Voice::is_idle))
            .unwrap_or(0);

        self.voices[slot].start(pitch, velocity, sample_rate);
        Some(slot)
    }

    /// Release every voice assigned to `pitch`. Unmatched note-offs do nothing.
    pub fn note_off(&mut self, pitch: u8, allow_tail: bool) {
        for voice in &mut self.voices {
            if voice.pitch() == Some(pitch) {
                voice.release(allow_tail);
            }
        }
    }

    pub fn all_notes_off(&mut self, allow_tail: bool) {
        for voice in &mut self.voices {
            voice.release(allow_tail);
        }
    }

    /// Silence everything immediately (restart).
    pub fn reset(&mut self) {
        self.all_notes_off(false);
    }

    /// Add every voice's output for frames `[start, start + count)`.
    pub fn render_all<A: Accumulator + ?Sized>(&mut self, out: &mut A, start: usize, count: usize) {
        for voice in &mut self.voices {
            voice.render(out, start, count);
        }
    }

    pub fn active_voice_count(&self) -> usize {
        self.voices.iter().filter(|v| !v.is_idle()).count()
    }

    pub fn polyphony(&self) -> usize {
        self.voices.len()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }
}
