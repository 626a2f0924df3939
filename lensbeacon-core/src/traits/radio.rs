//! Beacon radio trait

use crate::config::BeaconConfig;

/// Errors reported by a radio driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Advertisement data longer than the legacy limit
    DataTooLong,
    /// Configuration not supported by the controller
    Unsupported,
    /// Controller refused the command
    Rejected,
    /// Start requested while a beacon is already running
    Busy,
    /// Driver did not answer
    Unavailable,
}

/// Non-connectable advertising radio
///
/// Each call completes before it returns; there is no pending state the
/// caller has to track. Implementations are owned exclusively by the
/// beacon controller.
#[allow(async_fn_in_trait)]
pub trait BeaconRadio {
    /// Load the advertisement data used by the next start
    async fn set_advertisement_data(&mut self, data: &[u8]) -> Result<(), RadioError>;

    /// Apply interval window, channel map, power and address
    async fn set_config(&mut self, config: &BeaconConfig) -> Result<(), RadioError>;

    /// Begin advertising with the loaded data and configuration
    async fn start_advertising(&mut self) -> Result<(), RadioError>;

    /// Stop advertising
    ///
    /// Must be a no-op when nothing is being advertised.
    async fn stop_advertising(&mut self);
}
