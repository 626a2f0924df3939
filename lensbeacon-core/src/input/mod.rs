//! Input events and button handling

pub mod button;
pub mod events;

pub use button::{ButtonTiming, ButtonTracker};
pub use events::{InputEvent, Key, KeyAction};
