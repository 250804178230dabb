//! Topic-based event bus for runtime events.
//!
//! The runtime never prints. Every log line, status line and cue an encounter
//! produces is published here, and consumers subscribe only to the topics
//! they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{SessionEvent, TurnEvent};
