#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{SineOscillator, TailOff, TailStep},
    io::{converter::midi_note_to_freq, Accumulator},
};

/// Shape of every voice in a pool
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    /// Output level at velocity 1.0
    pub gain: f64,
    /// Per-sample multiplier applied to the release tail
    pub tail_coefficient: f64,
    /// Tail level at or below which a releasing voice is freed
    pub release_threshold: f64,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            gain: 0.15,
            tail_coefficient: 0.99,
            release_threshold: 0.005,
        }
    }
}

/// One sine voice: oscillator, level and release tail.
///
/// A voice is idle when its oscillator increment is zero; idle voices render
/// nothing and may be reassigned.
#[derive(Debug, Clone)]
pub struct Voice {
    osc: SineOscillator,
    envelope: TailOff,
    gain: f64,
    level: f64,
    pitch: Option<u8>,
}

impl Voice {
    pub fn new(params: VoiceParams) -> Self {
        Self {
            osc: SineOscillator::new(),
            envelope: TailOff::new(params.tail_coefficient, params.release_threshold),
            gain: params.gain,
            level: 0.0,
            pitch: None,
        }
    }

    /// Start (or retrigger) a note. Previous state is overwritten.
    pub fn start(&mut self, pitch: u8, velocity: f32, sample_rate: f64) {
        let velocity = if velocity.is_finite() {
            velocity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.level = velocity as f64 * self.gain;
        self.envelope.trigger();
        self.osc.start(midi_note_to_freq(pitch), sample_rate);
        self.pitch = Some(pitch);
    }

    /// Note-off. With `allow_tail` the voice fades out (once; repeated calls
    /// leave a running fade alone). Without it the voice goes idle at once.
    pub fn release(&mut self, allow_tail: bool) {
        if self.is_idle() {
            return;
        }

        if allow_tail {
            self.envelope.release();
        } else {
            self.clear_note();
        }
    }

    /// Add `count` samples into `out` starting at frame `start`, on every
    /// channel. Stops early if the release tail finishes inside the range.
    pub fn render<A: Accumulator + ?Sized>(&mut self, out: &mut A, start: usize, count: usize) {
        if self.osc.is_idle() {
            return;
        }

        for frame in start..start + count {
            let sample = self.osc.next_sample() * self.level * self.envelope.gain();
            out.add_frame(frame, sample as f32);

            if self.envelope.step() == TailStep::Finished {
                self.clear_note();
                break;
            }
        }
    }

    fn clear_note(&mut self) {
        self.osc.stop();
        self.envelope.clear();
        self.pitch = None;
    }

    pub fn is_idle(&self) -> bool {
        self.osc.is_idle()
    }

    pub fn is_releasing(&self) -> bool {
        self.envelope.is_releasing()
    }

    /// Pitch this voice is assigned to, `None` when idle
    pub fn pitch(&self) -> Option<u8> {
        self.pitch
    }

    /// Current release multiplier (0.0 while sustaining or idle)
    pub fn tail_level(&self) -> f64 {
        self.envelope.level()
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn phase(&self) -> f64 {
        self.osc.phase()
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new(VoiceParams::default())
    }
}
