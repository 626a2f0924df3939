//! Actions requested by keys and events that move the screen

/// Work requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Move the selection one entry up (wraps)
    SelectPrevious,
    /// Move the selection one entry down (wraps)
    SelectNext,
    /// Start advertising the selected profile
    StartBeacon,
    /// Stop the running beacon
    StopBeacon,
    /// Leave the application
    Exit,
}

/// Beacon outcomes that drive screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Beacon controller reported a successful start
    StartSucceeded,
    /// Beacon controller reported a failed start
    StartFailed,
    /// Beacon stopped
    Stopped,
}
