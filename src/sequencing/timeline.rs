//! Timeline - the read-only list of scheduled note events
//!
//! Built once before playback, then scanned forward by the renderer. The
//! timeline itself is immutable; forward progress lives in a separate
//! `TimelineCursor` so the same timeline can be replayed from the start.

use super::event::NoteEvent;

/// Note events ordered by timestamp (ties keep insertion order)
#[derive(Debug, Clone, Default)]
pub struct EventTimeline {
    events: Vec<NoteEvent>,
}

impl EventTimeline {
    /// Build a timeline from events in any order.
    ///
    /// The sort is stable, so events sharing a timestamp are delivered in
    /// the order they were given.
    pub fn new(mut events: Vec<NoteEvent>) -> Self {
        events.sort_by_key(|e| e.timestamp);
        log::debug!("timeline built with {} events", events.len());
        Self { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Index of the first event with `timestamp >= position`, or `None`
    /// when the timeline is exhausted.
    pub fn next_event_at_or_after(&self, position: u64) -> Option<usize> {
        let index = self.events.partition_point(|e| e.timestamp < position);
        (index < self.events.len()).then_some(index)
    }

    pub fn event_at(&self, index: usize) -> Option<&NoteEvent> {
        self.events.get(index)
    }

    pub fn timestamp_of(&self, index: usize) -> Option<u64> {
        self.events.get(index).map(|e| e.timestamp)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteEvent> {
        self.events.iter()
    }

    /// Timestamp of the last event (0 for an empty timeline)
    pub fn end_position(&self) -> u64 {
        self.events.last().map_or(0, |e| e.timestamp)
    }
}

impl FromIterator<NoteEvent> for EventTimeline {
    fn from_iter<I: IntoIterator<Item = NoteEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Forward-only read position into an `EventTimeline`.
///
/// Indices handed out by the cursor never go backwards, so an event is
/// delivered at most once per pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineCursor {
    next: usize,
}

impl TimelineCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first event (explicit restart only).
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Index of the next unconsumed event.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Skip every event timestamped before `position`.
    ///
    /// Never moves backwards: seeking to an earlier position is a no-op.
    pub fn skip_to(&mut self, timeline: &EventTimeline, position: u64) {
        let target = timeline
            .next_event_at_or_after(position)
            .unwrap_or(timeline.len());
        self.next = self.next.max(target);
    }

    /// Next unconsumed event timestamped before `end`, without consuming it.
    pub fn peek_due(&self, timeline: &EventTimeline, end: u64) -> Option<usize> {
        timeline
            .timestamp_of(self.next)
            .filter(|&timestamp| timestamp < end)
            .map(|_| self.next)
    }

    /// Consume and return the next event timestamped before `end`.
    pub fn next_due<'t>(&mut self, timeline: &'t EventTimeline, end: u64) -> Option<&'t NoteEvent> {
        let index = self.peek_due(timeline, end)?;
        self.next = index + 1;
        timeline.event_at(index)
    }
}
