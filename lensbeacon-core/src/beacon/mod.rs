//! Beacon controller
//!
//! Owns the radio for the lifetime of the application and keeps the
//! session flags in step with what the radio last reported.

pub mod controller;
pub mod session;

pub use controller::{BeaconController, BeaconError};
pub use session::{BeaconSession, BeaconState};
