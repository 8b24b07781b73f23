//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The driver
//! dispatches one action per keypress; all repeat behavior is left to the
//! terminal.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
