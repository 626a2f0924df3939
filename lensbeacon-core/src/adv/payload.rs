//! Advertisement payload builder
//!
//! Layout (9 bytes):
//! ```text
//! ┌─────┬──────┬───────┐┌─────┬──────┬────────┬────────┬──────┬──────┐
//! │ 02  │ 01   │ 06    ││ 05  │ FF   │ CID lo │ CID hi │ 00   │ 00   │
//! │ len │ Flags│ value ││ len │ MSD  │        │        │ placeholder │
//! └─────┴──────┴───────┘└─────┴──────┴────────┴────────┴──────┴──────┘
//! ```
//!
//! Receivers read the two bytes after the Manufacturer Specific Data type
//! as a little-endian Company ID.

use core::fmt;

use super::{AD_TYPE_FLAGS, AD_TYPE_MANUFACTURER_DATA, BR_EDR_NOT_SUPPORTED, LE_GENERAL_DISCOVERABLE};
use crate::profile::DeviceProfile;

/// Maximum legacy advertisement data length
pub const MAX_ADV_DATA_LEN: usize = 31;

/// Length of the payload produced by [`build_payload`]
pub const PAYLOAD_LEN: usize = 9;

const _: () = assert!(PAYLOAD_LEN <= MAX_ADV_DATA_LEN);

/// Owned advertisement data, bounded by the legacy limit
pub type AdvData = heapless::Vec<u8, MAX_ADV_DATA_LEN>;

/// Placeholder manufacturer payload, always zero
const PLACEHOLDER: [u8; 2] = [0x00, 0x00];

/// Build the advertisement payload for a profile
pub fn build_payload(profile: &DeviceProfile) -> [u8; PAYLOAD_LEN] {
    let [cid_lo, cid_hi] = profile.company_id.to_le_bytes();

    [
        // Flags
        0x02,
        AD_TYPE_FLAGS,
        LE_GENERAL_DISCOVERABLE | BR_EDR_NOT_SUPPORTED,
        // Manufacturer Specific Data: type + CID + placeholder
        0x05,
        AD_TYPE_MANUFACTURER_DATA,
        cid_lo,
        cid_hi,
        PLACEHOLDER[0],
        PLACEHOLDER[1],
    ]
}

/// Space-separated upper-case hex dump of a byte slice
///
/// `HexBytes(&[0x02, 0x01, 0x06])` displays as `02 01 06`.
#[derive(Clone, Copy)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
