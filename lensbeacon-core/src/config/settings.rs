//! Application settings
//!
//! Everything the firmware reads from `lensbeacon.toml`. Defaults match
//! the values the emulator was designed around, so a missing or broken
//! settings blob still yields a working device.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BeaconConfig, ConfigError};

/// UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UiSettings {
    /// Screen refresh tick while no input arrives (ms)
    pub refresh_ms: u32,
    /// Time a button level must be stable before it counts (ms)
    pub debounce_ms: u32,
    /// Hold time before the first repeat (ms)
    pub repeat_delay_ms: u32,
    /// Time between repeats while held (ms)
    pub repeat_interval_ms: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            refresh_ms: 100,
            debounce_ms: 20,
            repeat_delay_ms: 500,
            repeat_interval_ms: 150,
        }
    }
}

/// LED notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotifySettings {
    /// Blink the LED while advertising
    pub led: bool,
    /// LED on-time per blink (ms)
    pub blink_on_ms: u32,
    /// Blink period (ms)
    pub blink_period_ms: u32,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            led: true,
            blink_on_ms: 50,
            blink_period_ms: 1000,
        }
    }
}

/// All settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub beacon: BeaconConfig,
    pub ui: UiSettings,
    pub notify: NotifySettings,
}

impl Settings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.beacon.validate()?;

        let ui = &self.ui;
        if ui.refresh_ms == 0
            || ui.debounce_ms == 0
            || ui.repeat_interval_ms == 0
            || ui.repeat_delay_ms < ui.debounce_ms
        {
            return Err(ConfigError::UiTiming);
        }

        let n = &self.notify;
        if n.blink_on_ms == 0 || n.blink_on_ms >= n.blink_period_ms {
            return Err(ConfigError::BlinkTiming);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(Settings::default().validate(), Ok(()));
        assert_eq!(Settings::default().beacon, BeaconConfig::default());
    }

    #[test]
    fn test_ui_timing() {
        let mut s = Settings::default();
        s.ui.refresh_ms = 0;
        assert_eq!(s.validate(), Err(ConfigError::UiTiming));

        let mut s = Settings::default();
        s.ui.repeat_delay_ms = 10;
        assert_eq!(s.validate(), Err(ConfigError::UiTiming));
    }

    #[test]
    fn test_blink_timing() {
        let mut s = Settings::default();
        s.notify.blink_on_ms = 1000;
        assert_eq!(s.validate(), Err(ConfigError::BlinkTiming));
    }

    #[test]
    fn test_beacon_errors_propagate() {
        let mut s = Settings::default();
        s.beacon.interval_max_ms = 50;
        assert_eq!(s.validate(), Err(ConfigError::IntervalInverted));
    }
}
