//! Low-level DSP primitives used by the voices.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the
//! signal-processing math; note bookkeeping lives in `synth`.

/// Exponential release envelope.
pub mod envelope;
/// Phase-accumulating sine oscillator.
pub mod oscillator;

pub use envelope::{TailOff, TailStep};
pub use oscillator::SineOscillator;
