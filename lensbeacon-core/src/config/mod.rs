//! Configuration types
//!
//! Board-agnostic configuration shared by the controller and the firmware
//! build script. With the `serde` feature the types can be read from TOML
//! and stored as postcard binary data.

pub mod beacon;
pub mod settings;

use core::fmt;

pub use beacon::{AddressType, BeaconConfig, ChannelMap, TxPower};
pub use settings::{NotifySettings, Settings, UiSettings};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Advertising interval outside 20..=10240 ms
    IntervalOutOfRange,
    /// Minimum interval greater than maximum
    IntervalInverted,
    /// No advertising channel selected
    NoChannels,
    /// A UI timing value is zero or inconsistent
    UiTiming,
    /// LED blink on-time does not fit in the blink period
    BlinkTiming,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IntervalOutOfRange => f.write_str("advertising interval must be within 20..=10240 ms"),
            ConfigError::IntervalInverted => f.write_str("interval_min_ms must not exceed interval_max_ms"),
            ConfigError::NoChannels => f.write_str("at least one advertising channel must be enabled"),
            ConfigError::UiTiming => f.write_str("ui timings must be non-zero and repeat_delay_ms >= debounce_ms"),
            ConfigError::BlinkTiming => f.write_str("blink_on_ms must be non-zero and shorter than blink_period_ms"),
        }
    }
}
