/// Sample clock for one playback session.
///
/// Only the renderer writes to it; it moves forward by exactly the number
/// of frames rendered each block and goes back to zero only on restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    sample_position: u64,
    sample_rate: f64,
}

impl PlaybackClock {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_position: 0,
            sample_rate,
        }
    }

    pub fn position(&self) -> u64 {
        self.sample_position
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    pub fn advance(&mut self, frames: u64) {
        self.sample_position += frames;
    }

    pub fn reset(&mut self) {
        self.sample_position = 0;
    }

    /// Current position in seconds
    pub fn seconds(&self) -> f64 {
        self.sample_position as f64 / self.sample_rate
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(44_100.0)
    }
}
