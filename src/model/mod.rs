mod event;
mod table;

pub use event::{EventCounts, EventRow, EventType};
pub use table::EventTable;
