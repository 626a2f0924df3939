//! Board-agnostic core logic for the LensBeacon emulator
//!
//! This crate contains everything that decides *what* goes on air and
//! *when*, without depending on a particular radio, display or board:
//!
//! - Device profile table (emulated manufacturers)
//! - Advertisement payload builder and AD structure reader
//! - Random static address and advertising configuration
//! - Beacon controller (radio lifecycle)
//! - Tagged request/answer link to a radio owned by another task
//! - Screen/input state machine and the owned application state
//! - Button debouncing and key repeat
//! - Settings types shared with the firmware build script

#![no_std]
#![deny(unsafe_code)]

pub mod adv;
pub mod app;
pub mod beacon;
pub mod config;
pub mod input;
pub mod link;
pub mod profile;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{App, Flow, Outcome, UiSnapshot};
pub use beacon::{BeaconController, BeaconError, BeaconSession, BeaconState};
pub use profile::{profile_at, DeviceIndex, DeviceProfile, DEVICE_COUNT};
pub use state::{Action, Event, Screen};
