use std::f64::consts::TAU;

/*
Sine Oscillator
===============

The only sound source in this crate: a phase accumulator driving `sin()`.

Vocabulary
----------

  phase       Current angle in radians. Starts at 0 on every note-on so the
              first sample of a note is always sin(0) = 0 (no click from a
              leftover angle of the previous note).

  increment   Radians added to `phase` per sample:

                  increment = 2π × frequency / sample_rate

              Example: A4 (440 Hz) at 44.1kHz
                - 440 / 44100 ≈ 0.009977 cycles per sample
                - × 2π        ≈ 0.06269 radians per sample

  idle        An increment of exactly 0.0 means "not sounding". Voices use
              this as their idle flag, so `stop()` zeroes it.


Why f64?
--------

Phase keeps growing for as long as a note is held. At f32 precision the
angle loses resolution after a few seconds and the pitch starts to wobble;
f64 keeps it stable for hours. Output samples are narrowed to f32 at the
last moment.
*/

#[derive(Debug, Clone, Copy, Default)]
pub struct SineOscillator {
    phase: f64,
    increment: f64,
}

impl SineOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the phase and tune to `frequency` at `sample_rate`.
    pub fn start(&mut self, frequency: f64, sample_rate: f64) {
        self.phase = 0.0;
        self.increment = TAU * frequency / sample_rate;
    }

    /// Mark the oscillator idle. Phase is left as-is; `start` resets it.
    pub fn stop(&mut self) {
        self.increment = 0.0;
    }

    /// Value at the current phase, then advance by one sample.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let value = self.phase.sin();
        self.phase += self.increment;
        value
    }

    pub fn is_idle(&self) -> bool {
        self.increment == 0.0
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }
}
