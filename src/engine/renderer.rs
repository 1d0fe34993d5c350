//! BlockRenderer - sample-accurate timeline playback
//!
//! Runs in the audio callback. Each block it pulls due events from the
//! timeline, applies them to the voice pool at their exact frame offset,
//! and mixes every voice into the output.

use crate::{
    engine::{clock::PlaybackClock, DispatchPolicy, EngineConfig, EngineError},
    io::Accumulator,
    sequencing::{EventTimeline, NoteEvent, NoteKind, TimelineCursor},
    synth::{ControlMessage, MessageReceiver, VoicePool},
};

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// No sample rate bound yet; blocks render silence and the clock holds
    Stopped,
    /// Sample rate and timeline bound, waiting for the first block
    Preparing,
    /// Rendering; the clock advances every block
    Running,
}

pub struct BlockRenderer {
    config: EngineConfig,
    state: RendererState,
    clock: PlaybackClock,
    timeline: EventTimeline,
    cursor: TimelineCursor,
    pool: VoicePool,
    control: Option<Box<dyn MessageReceiver + Send>>,
}

impl BlockRenderer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            pool: VoicePool::new(config.polyphony, config.voice),
            config,
            state: RendererState::Stopped,
            clock: PlaybackClock::default(),
            timeline: EventTimeline::empty(),
            cursor: TimelineCursor::new(),
            control: None,
        }
    }

    /// Attach a control channel, drained at the top of every block
    pub fn with_control<R: MessageReceiver + Send + 'static>(mut self, receiver: R) -> Self {
        self.control = Some(Box::new(receiver));
        self
    }

    /// Bind the sample rate and load the timeline. Playback starts from
    /// sample 0 on the next block.
    pub fn prepare(&mut self, sample_rate: f64, timeline: EventTimeline) -> Result<(), EngineError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(EngineError::InvalidSampleRate(sample_rate));
        }

        log::info!(
            "prepared at {} Hz: {} events, {} voices",
            sample_rate,
            timeline.len(),
            self.pool.polyphony()
        );

        self.clock.set_sample_rate(sample_rate);
        self.timeline = timeline;
        self.rewind();
        self.state = RendererState::Preparing;
        Ok(())
    }

    /// Back to the start of the timeline with every voice silent
    pub fn restart(&mut self) {
        log::debug!("restart at sample {}", self.clock.position());
        self.rewind();
        if self.state != RendererState::Stopped {
            self.state = RendererState::Preparing;
        }
    }

    /// End the session. A new `prepare` is needed before sound comes out.
    pub fn release_resources(&mut self) {
        self.rewind();
        self.state = RendererState::Stopped;
    }

    fn rewind(&mut self) {
        self.clock.reset();
        self.cursor.reset();
        self.pool.reset();
    }

    /// Render `count` frames into `out`, starting from silence.
    ///
    /// `count` is clipped to the size of `out`, unless `out` has no
    /// channels (nothing is written, but time still passes). Never allocates
    /// or blocks.
    pub fn process_block<A: Accumulator + ?Sized>(&mut self, out: &mut A, count: usize) {
        let count = if out.num_channels() == 0 {
            count
        } else {
            count.min(out.num_frames())
        };
        out.clear_region(0, count);

        match self.state {
            RendererState::Stopped => return,
            RendererState::Preparing => self.state = RendererState::Running,
            RendererState::Running => {}
        }

        self.drain_control();

        let block_start = self.clock.position();
        let block_end = block_start + count as u64;

        let max_events = match self.config.dispatch {
            DispatchPolicy::SingleEventPerBlock => 1,
            DispatchPolicy::DrainBlock => usize::MAX,
        };

        // Anything the clock has already passed is never delivered
        self.cursor.skip_to(&self.timeline, block_start);

        let mut rendered = 0;
        let mut dispatched = 0;
        while dispatched < max_events {
            let Some(event) = self.cursor.next_due(&self.timeline, block_end).copied() else {
                break;
            };
            debug_assert!(event.timestamp >= block_start);

            // Voices play up to the event's frame with the old state
            let offset = (event.timestamp - block_start) as usize;
            self.pool.render_all(out, rendered, offset - rendered);
            rendered = offset;

            self.dispatch(&event);
            dispatched += 1;
        }

        self.pool.render_all(out, rendered, count - rendered);
        self.clock.advance(count as u64);
    }

    fn dispatch(&mut self, event: &NoteEvent) {
        match event.kind {
            NoteKind::NoteOn => {
                self.pool
                    .note_on(event.pitch, event.velocity, self.clock.sample_rate());
            }
            NoteKind::NoteOff => self.pool.note_off(event.pitch, self.config.allow_tail_off),
        }
    }

    fn drain_control(&mut self) {
        let Some(mut receiver) = self.control.take() else {
            return;
        };

        while let Some(msg) = receiver.pop() {
            match msg {
                ControlMessage::NoteOn { pitch, velocity } => {
                    self.pool.note_on(pitch, velocity, self.clock.sample_rate());
                }
                ControlMessage::NoteOff { pitch } => {
                    self.pool.note_off(pitch, self.config.allow_tail_off)
                }
                ControlMessage::AllNotesOff { allow_tail } => self.pool.all_notes_off(allow_tail),
                ControlMessage::Restart => self.rewind(),
            }
        }

        self.control = Some(receiver);
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn pool(&self) -> &VoicePool {
        &self.pool
    }

    pub fn timeline(&self) -> &EventTimeline {
        &self.timeline
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
