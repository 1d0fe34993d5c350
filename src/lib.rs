pub mod dsp;
pub mod engine; // Block rendering, clock, configuration
pub mod io;
pub mod sequencing; // Note events and the playback timeline
pub mod synth; // Voice management and polyphony

pub use engine::{BlockRenderer, DispatchPolicy, EngineConfig, EngineError};

/// Largest block the host binary hands to the renderer in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
