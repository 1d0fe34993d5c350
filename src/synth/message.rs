#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Commands sent to the renderer from outside the audio thread.
/// Applied at the start of the next block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    NoteOn { pitch: u8, velocity: f32 },
    NoteOff { pitch: u8 },
    AllNotesOff { allow_tail: bool },
    /// Rewind the clock and timeline to zero and silence all voices
    Restart,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}
