//! Platform abstraction layer
//!
//! Seams to the hosting environment:
//! - Input events and held keys
//! - Monotonic time and end-of-tick pacing

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, Key, KeyMap, RawInput, ScriptedInput, TickCommands};
pub use time::{Clock, ManualClock, SystemClock};
