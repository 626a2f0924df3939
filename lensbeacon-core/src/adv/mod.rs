//! Advertisement data
//!
//! Builds the legacy advertisement payload for a profile and reads AD
//! structures back the way a receiving platform does.

pub mod address;
pub mod payload;
pub mod reader;

pub use address::{AddressError, EmulatedAddress, EMULATED_ADDRESS};
pub use payload::{build_payload, AdvData, HexBytes, MAX_ADV_DATA_LEN, PAYLOAD_LEN};
pub use reader::{manufacturer_data, AdStructures};

/// AD type: Flags
pub const AD_TYPE_FLAGS: u8 = 0x01;

/// AD type: Manufacturer Specific Data
pub const AD_TYPE_MANUFACTURER_DATA: u8 = 0xFF;

/// Flags bit: LE General Discoverable Mode
pub const LE_GENERAL_DISCOVERABLE: u8 = 0x02;

/// Flags bit: BR/EDR Not Supported
pub const BR_EDR_NOT_SUPPORTED: u8 = 0x04;
