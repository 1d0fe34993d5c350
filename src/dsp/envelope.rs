/*
Tail-Off Envelope
=================

The voices in this crate have no attack or decay stage: a note starts at
full level and holds it until note-off. What happens after note-off is the
interesting part, and that is all this module models.

Vocabulary
----------

  tail        The release multiplier. 0.0 means "not releasing" (the note is
              sustaining, or the voice is idle). Anything above 0.0 means the
              voice is fading out and every output sample is scaled by it.

  coefficient How much of `tail` survives each sample (0.99 by default).
              Multiplying every sample gives an exponential curve.

  threshold   Once `tail` falls to or below this (0.005 by default) the fade
              is considered inaudible and the voice is freed.


The Shape: Exponential Decay
----------------------------

  Gain
    1.0 ┐────────────┐
        │   sustain  │╲
        │            │ ╲
        │            │  ╲_
        │            │    ╲__
    0.0 └────────────┴───────╲___──→ Time
                  note-off     ↑ tail ≤ threshold, voice freed

Release starts at exactly 1.0. Each sample the current `tail` is used as
the gain and then multiplied by the coefficient.


The Math: How Long Is The Tail?
-------------------------------

After n samples of release, tail = coefficient^n. The voice frees itself
on the first n where

    coefficient^n ≤ threshold
    n ≥ ln(threshold) / ln(coefficient)

With the defaults: ln(0.005) / ln(0.99) ≈ 527.2, so the release produces
528 samples (about 12ms at 44.1kHz) and then goes silent. The duration is
counted in samples, not seconds, so it shortens at higher sample rates.


Idempotent Release
------------------

Note-off can arrive more than once for the same voice (a pool-wide
all-notes-off racing a timeline note-off, say). Restarting the fade each
time would push `tail` back to 1.0 and stretch the note, so `release()` only
arms the fade when it is not already running.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TailStep {
    /// Keep rendering.
    Continue,
    /// The tail crossed the threshold on this sample; the voice should go idle.
    Finished,
}

#[derive(Debug, Clone, Copy)]
pub struct TailOff {
    coefficient: f64,
    threshold: f64,
    tail: f64,
}

impl TailOff {
    pub fn new(coefficient: f64, threshold: f64) -> Self {
        Self {
            coefficient,
            threshold,
            tail: 0.0,
        }
    }

    /// Back to sustaining. Called on note-on.
    pub fn trigger(&mut self) {
        self.tail = 0.0;
    }

    /// Arm the fade. Returns `false` when a fade was already running.
    pub fn release(&mut self) -> bool {
        if self.tail == 0.0 {
            self.tail = 1.0;
            true
        } else {
            false
        }
    }

    /// Drop the fade without finishing it.
    pub fn clear(&mut self) {
        self.tail = 0.0;
    }

    /// Gain for the current sample.
    #[inline]
    pub fn gain(&self) -> f64 {
        if self.tail > 0.0 {
            self.tail
        } else {
            1.0
        }
    }

    /// Advance one sample. A sustaining envelope never finishes.
    #[inline]
    pub fn step(&mut self) -> TailStep {
        if self.tail == 0.0 {
            return TailStep::Continue;
        }

        self.tail *= self.coefficient;

        if self.tail <= self.threshold {
            self.tail = 0.0;
            TailStep::Finished
        } else {
            TailStep::Continue
        }
    }

    pub fn is_releasing(&self) -> bool {
        self.tail > 0.0
    }

    pub fn level(&self) -> f64 {
        self.tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples_until_finished(env: &mut TailOff) -> usize {
        let mut n = 0;
        loop {
            n += 1;
            if env.step() == TailStep::Finished {
                return n;
            }
            assert!(n < 100_000, "tail never finished");
        }
    }

    #[test]
    fn sustain_never_finishes() {
        let mut env = TailOff::new(0.99, 0.005);
        env.trigger();
        for _ in 0..10_000 {
            assert_eq!(env.step(), TailStep::Continue);
            assert_eq!(env.gain(), 1.0);
        }
    }

    #[test]
    fn default_tail_lasts_528_samples() {
        let mut env = TailOff::new(0.99, 0.005);
        assert!(env.release());
        assert_eq!(samples_until_finished(&mut env), 528);
        assert!(!env.is_releasing());
        assert_eq!(env.level(), 0.0);
    }

    #[test]
    fn release_is_not_restarted_while_fading() {
        let mut env = TailOff::new(0.99, 0.005);
        env.release();
        for _ in 0..100 {
            env.step();
        }
        let before = env.level();

        assert!(!env.release());
        assert_eq!(env.level(), before);
    }

    #[test]
    fn fade_is_strictly_decreasing() {
        let mut env = TailOff::new(0.95, 0.001);
        env.release();
        let mut last = env.gain();
        while env.step() == TailStep::Continue {
            assert!(env.gain() < last);
            last = env.gain();
        }
    }

    #[test]
    fn trigger_cancels_fade() {
        let mut env = TailOff::new(0.99, 0.005);
        env.release();
        env.step();
        env.trigger();
        assert!(!env.is_releasing());
        assert_eq!(env.gain(), 1.0);
    }
}
