//! Hardware abstraction traits
//!
//! These traits define the interface between the beacon logic and the
//! board-specific radio and notification implementations.

pub mod notify;
pub mod radio;

pub use notify::{Notification, Notifier};
pub use radio::{BeaconRadio, RadioError};
