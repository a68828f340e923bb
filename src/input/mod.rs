//! Test event input
//!
//! Reads finished-test events from a file or stdin.

mod events;

pub use events::{open_input, stream_events, EventReader, TestEvent};
