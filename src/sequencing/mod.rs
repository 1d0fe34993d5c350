pub mod event;
pub mod timeline;

pub use event::{NoteEvent, NoteKind};
pub use timeline::{EventTimeline, TimelineCursor};
