// Purpose: Voice management, polyphony, note routing
// This layer sits above the DSP primitives and manages multiple voices

pub mod message;
pub mod pool;
pub mod voice;

pub use message::{ControlMessage, MessageReceiver};
pub use pool::VoicePool;
pub use voice::{Voice, VoiceParams};
