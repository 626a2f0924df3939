//! Screen/input state machine
//!
//! Two screens, `Menu` and `Advertising`. The machine is explicit, finite
//! and deterministic: keys map to actions, beacon outcomes map to screen
//! transitions.

pub mod events;
pub mod machine;

pub use events::{Action, Event};
pub use machine::Screen;
