//! Block rendering: clock, timeline dispatch and voice mixing.

pub mod clock;
pub mod renderer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::synth::VoiceParams;

pub use self::{
    clock::PlaybackClock,
    renderer::{BlockRenderer, RendererState},
};

/// How many timeline events a block may dispatch
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Look up one event per block. Further events inside the same block
    /// are skipped once the clock passes them.
    SingleEventPerBlock,
    /// Dispatch every event due inside the block.
    #[default]
    DrainBlock,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Number of voices (at least 1)
    pub polyphony: usize,
    pub voice: VoiceParams,
    /// Whether timeline note-offs fade out or cut immediately
    pub allow_tail_off: bool,
    pub dispatch: DispatchPolicy,
}

impl EngineConfig {
    pub fn with_polyphony(mut self, polyphony: usize) -> Self {
        self.polyphony = polyphony;
        self
    }

    pub fn with_voice(mut self, voice: VoiceParams) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_tail_off(mut self, allow_tail_off: bool) -> Self {
        self.allow_tail_off = allow_tail_off;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchPolicy) -> Self {
        self.dispatch = dispatch;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            polyphony: 4,
            voice: VoiceParams::default(),
            allow_tail_off: true,
            dispatch: DispatchPolicy::default(),
        }
    }
}

/// Errors that can occur when preparing the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Sample rate is zero, negative or not finite
    InvalidSampleRate(f64),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidSampleRate(rate) => {
                write!(f, "Invalid sample rate: {} Hz (must be finite and positive)", rate)
            }
        }
    }
}

impl std::error::Error for EngineError {}
