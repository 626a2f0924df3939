//! Advertising configuration
//!
//! Applied to the radio on every beacon start. The default is the fixed
//! configuration the emulator ships with: 100-200 ms interval, all three
//! primary channels, +6 dBm, random static address.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::adv::{EmulatedAddress, EMULATED_ADDRESS};

/// Shortest advertising interval allowed for legacy advertising (ms)
pub const MIN_ADV_INTERVAL_MS: u16 = 20;

/// Longest advertising interval allowed for legacy advertising (ms)
pub const MAX_ADV_INTERVAL_MS: u16 = 10_240;

/// Primary advertising channel selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelMap {
    /// Channel 37 (2402 MHz)
    pub ch37: bool,
    /// Channel 38 (2426 MHz)
    pub ch38: bool,
    /// Channel 39 (2480 MHz)
    pub ch39: bool,
}

impl ChannelMap {
    /// All three primary channels
    pub const ALL: ChannelMap = ChannelMap {
        ch37: true,
        ch38: true,
        ch39: true,
    };

    /// HCI channel map bits (bit 0 = channel 37)
    pub const fn bits(&self) -> u8 {
        (self.ch37 as u8) | (self.ch38 as u8) << 1 | (self.ch39 as u8) << 2
    }

    /// True when every primary channel is used
    pub const fn is_all(&self) -> bool {
        self.ch37 && self.ch38 && self.ch39
    }

    /// True when no channel is selected
    pub const fn is_empty(&self) -> bool {
        !(self.ch37 || self.ch38 || self.ch39)
    }
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self::ALL
    }
}

/// Transmit power level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TxPower {
    Minus20dBm,
    Minus12dBm,
    Minus8dBm,
    Minus4dBm,
    ZerodBm,
    Plus2dBm,
    Plus4dBm,
    #[default]
    Plus6dBm,
    Plus8dBm,
}

impl TxPower {
    /// Power in dBm
    pub const fn dbm(self) -> i8 {
        match self {
            TxPower::Minus20dBm => -20,
            TxPower::Minus12dBm => -12,
            TxPower::Minus8dBm => -8,
            TxPower::Minus4dBm => -4,
            TxPower::ZerodBm => 0,
            TxPower::Plus2dBm => 2,
            TxPower::Plus4dBm => 4,
            TxPower::Plus6dBm => 6,
            TxPower::Plus8dBm => 8,
        }
    }
}

/// Address type used while advertising
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressType {
    #[default]
    RandomStatic,
}

/// Complete advertising configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeaconConfig {
    /// Minimum advertising interval (ms)
    pub interval_min_ms: u16,
    /// Maximum advertising interval (ms)
    pub interval_max_ms: u16,
    /// Primary channels
    pub channels: ChannelMap,
    /// Transmit power
    pub tx_power: TxPower,
    /// Address type
    pub address_type: AddressType,
    /// Device address
    pub address: EmulatedAddress,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            interval_min_ms: 100,
            interval_max_ms: 200,
            channels: ChannelMap::ALL,
            tx_power: TxPower::Plus6dBm,
            address_type: AddressType::RandomStatic,
            address: EMULATED_ADDRESS,
        }
    }
}

impl BeaconConfig {
    /// Check the configuration against the legacy advertising limits
    ///
    /// The address is validated when it is constructed, so only the
    /// interval window and channel map are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_min_ms < MIN_ADV_INTERVAL_MS
            || self.interval_max_ms > MAX_ADV_INTERVAL_MS
        {
            return Err(ConfigError::IntervalOutOfRange);
        }
        if self.interval_min_ms > self.interval_max_ms {
            return Err(ConfigError::IntervalInverted);
        }
        if self.channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        Ok(())
    }

    /// One-line summary, e.g. `100-200ms  +6dBm  All Ch`
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Display adapter returned by [`BeaconConfig::summary`]
pub struct Summary<'a>(&'a BeaconConfig);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(f, "{}-{}ms  {:+}dBm  ", c.interval_min_ms, c.interval_max_ms, c.tx_power.dbm())?;
        if c.channels.is_all() {
            f.write_str("All Ch")
        } else {
            f.write_str("Ch")?;
            for (on, n) in [(c.channels.ch37, 37), (c.channels.ch38, 38), (c.channels.ch39, 39)] {
                if on {
                    write!(f, " {}", n)?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_default_config() {
        let c = BeaconConfig::default();
        assert_eq!(c.interval_min_ms, 100);
        assert_eq!(c.interval_max_ms, 200);
        assert!(c.channels.is_all());
        assert_eq!(c.channels.bits(), 0b111);
        assert_eq!(c.tx_power.dbm(), 6);
        assert_eq!(c.address_type, AddressType::RandomStatic);
        assert_eq!(c.address, EMULATED_ADDRESS);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_interval_validation() {
        let mut c = BeaconConfig::default();
        c.interval_min_ms = 10;
        assert_eq!(c.validate(), Err(ConfigError::IntervalOutOfRange));

        let mut c = BeaconConfig::default();
        c.interval_max_ms = 20_000;
        assert_eq!(c.validate(), Err(ConfigError::IntervalOutOfRange));

        let mut c = BeaconConfig::default();
        c.interval_min_ms = 300;
        assert_eq!(c.validate(), Err(ConfigError::IntervalInverted));
    }

    #[test]
    fn test_empty_channel_map() {
        let mut c = BeaconConfig::default();
        c.channels = ChannelMap {
            ch37: false,
            ch38: false,
            ch39: false,
        };
        assert_eq!(c.validate(), Err(ConfigError::NoChannels));
    }

    #[test]
    fn test_channel_bits() {
        let map = ChannelMap {
            ch37: false,
            ch38: true,
            ch39: true,
        };
        assert_eq!(map.bits(), 0b110);
        assert!(!map.is_all());
    }

    #[test]
    fn test_summary() {
        let mut s: heapless::String<32> = heapless::String::new();
        write!(s, "{}", BeaconConfig::default().summary()).unwrap();
        assert_eq!(s.as_str(), "100-200ms  +6dBm  All Ch");

        let mut c = BeaconConfig::default();
        c.tx_power = TxPower::Minus4dBm;
        c.channels.ch38 = false;
        s.clear();
        write!(s, "{}", c.summary()).unwrap();
        assert_eq!(s.as_str(), "100-200ms  -4dBm  Ch 37 39");
    }
}
