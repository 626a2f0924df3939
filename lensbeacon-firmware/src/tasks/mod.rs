//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod ble;
pub mod buttons;
pub mod controller;
pub mod display;
pub mod led;

pub use ble::{ble_task, BleController};
pub use buttons::buttons_task;
pub use controller::controller_task;
pub use display::{display_task, Display};
pub use led::led_task;
