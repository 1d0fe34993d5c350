// Purpose - external interfaces, format conversions

pub mod converter;
pub mod midi;

/// Multi-channel sample buffer that voices add into.
///
/// Writes are additive: several voices render into the same frames and the
/// result is their sum. Frames outside the buffer are ignored.
pub trait Accumulator {
    fn num_channels(&self) -> usize;

    fn num_frames(&self) -> usize;

    fn add_sample(&mut self, channel: usize, frame: usize, value: f32);

    /// Zero `count` frames starting at `start` on every channel.
    fn clear_region(&mut self, start: usize, count: usize);

    /// Add `value` to every channel of one frame.
    #[inline]
    fn add_frame(&mut self, frame: usize, value: f32) {
        for channel in 0..self.num_channels() {
            self.add_sample(channel, frame, value);
        }
    }
}

/// Planar output: one `Vec<f32>` per channel.
#[derive(Debug, Default, Clone)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; frames]; channels],
        }
    }

    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.buffers[channel]
    }
}

impl Accumulator for AudioOutput {
    fn num_channels(&self) -> usize {
        self.buffers.len()
    }

    fn num_frames(&self) -> usize {
        self.buffers.iter().map(Vec::len).min().unwrap_or(0)
    }

    #[inline]
    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        if let Some(sample) = self
            .buffers
            .get_mut(channel)
            .and_then(|buffer| buffer.get_mut(frame))
        {
            *sample += value;
        }
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        for buffer in &mut self.buffers {
            let end = (start + count).min(buffer.len());
            if start < end {
                buffer[start..end].fill(0.0);
            }
        }
    }
}

/// Interleaved view over a host buffer (`L R L R ...`), as handed out by
/// audio callbacks.
pub struct InterleavedBuffer<'a> {
    data: &'a mut [f32],
    channels: usize,
}

impl<'a> InterleavedBuffer<'a> {
    pub fn new(data: &'a mut [f32], channels: usize) -> Self {
        Self {
            data,
            channels: channels.max(1),
        }
    }
}

impl Accumulator for InterleavedBuffer<'_> {
    fn num_channels(&self) -> usize {
        self.channels
    }

    fn num_frames(&self) -> usize {
        self.data.len() / self.channels
    }

    #[inline]
    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        if channel >= self.channels {
            return;
        }
        if let Some(sample) = self.data.get_mut(frame * self.channels + channel) {
            *sample += value;
        }
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        let begin = (start * self.channels).min(self.data.len());
        let end = ((start + count) * self.channels).min(self.data.len());
        self.data[begin..end].fill(0.0);
    }
}
