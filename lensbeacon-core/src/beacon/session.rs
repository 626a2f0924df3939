//! Beacon session state

use crate::profile::DeviceIndex;

/// Controller sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeaconState {
    /// Radio silent
    Idle,
    /// Beacon on air
    Advertising,
}

/// Mutable beacon session
///
/// Only the beacon controller writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeaconSession {
    /// Profile selected for the next (or current) beacon
    pub selected: DeviceIndex,
    /// Outcome of the last start/stop
    pub advertising: bool,
}

impl BeaconSession {
    /// Fresh session: first profile, not advertising
    pub const fn new() -> Self {
        Self {
            selected: DeviceIndex::MetaTech,
            advertising: false,
        }
    }

    /// Sub-state derived from the advertising flag
    pub fn state(&self) -> BeaconState {
        if self.advertising {
            BeaconState::Advertising
        } else {
            BeaconState::Idle
        }
    }
}
