//! Random static device address
//!
//! Bytes are kept most-significant first, the order they are printed in.
//! The HCI and the air interface use the reverse order, see
//! [`EmulatedAddress::to_le_bytes`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address length in bytes
pub const ADDRESS_LEN: usize = 6;

/// Mask of the two address-type bits in the most significant byte
const TYPE_MASK: u8 = 0xC0;

/// Reasons an address is not a valid random static address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Top two bits of the most significant byte are not `11`
    NotStatic,
    /// Random part is all zeros
    AllZeros,
    /// Random part is all ones
    AllOnes,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::NotStatic => f.write_str("top two bits of the first byte must be set"),
            AddressError::AllZeros => f.write_str("random part must not be all zeros"),
            AddressError::AllOnes => f.write_str("random part must not be all ones"),
        }
    }
}

/// A validated random static address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[u8; 6]", into = "[u8; 6]"))]
pub struct EmulatedAddress([u8; ADDRESS_LEN]);

/// Address used by the emulator
///
/// Not derived from any factory address. Checked at compile time.
pub const EMULATED_ADDRESS: EmulatedAddress =
    match EmulatedAddress::random_static([0xDE, 0x9A, 0x3C, 0x1D, 0x87, 0x42]) {
        Ok(addr) => addr,
        Err(_) => panic!("EMULATED_ADDRESS is not a random static address"),
    };

impl EmulatedAddress {
    /// Validate a random static address given most significant byte first
    pub const fn random_static(bytes: [u8; ADDRESS_LEN]) -> Result<Self, AddressError> {
        if bytes[0] & TYPE_MASK != TYPE_MASK {
            return Err(AddressError::NotStatic);
        }

        // The 46 random bits exclude the two type bits
        let mut zeros = bytes[0] & !TYPE_MASK == 0;
        let mut ones = bytes[0] | TYPE_MASK == 0xFF;
        let mut i = 1;
        while i < ADDRESS_LEN {
            zeros &= bytes[i] == 0x00;
            ones &= bytes[i] == 0xFF;
            i += 1;
        }

        if zeros {
            Err(AddressError::AllZeros)
        } else if ones {
            Err(AddressError::AllOnes)
        } else {
            Ok(Self(bytes))
        }
    }

    /// Bytes, most significant first
    pub const fn bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Bytes in over-the-air order (least significant first)
    pub const fn to_le_bytes(&self) -> [u8; ADDRESS_LEN] {
        let b = self.0;
        [b[5], b[4], b[3], b[2], b[1], b[0]]
    }
}

impl Default for EmulatedAddress {
    fn default() -> Self {
        EMULATED_ADDRESS
    }
}

impl TryFrom<[u8; ADDRESS_LEN]> for EmulatedAddress {
    type Error = AddressError;

    fn try_from(bytes: [u8; ADDRESS_LEN]) -> Result<Self, Self::Error> {
        Self::random_static(bytes)
    }
}

impl From<EmulatedAddress> for [u8; ADDRESS_LEN] {
    fn from(addr: EmulatedAddress) -> Self {
        addr.0
    }
}

/// Formats as `DE:9A:3C:1D:87:42`
impl fmt::Display for EmulatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_builtin_address_is_random_static() {
        let b = EMULATED_ADDRESS.bytes();
        assert_eq!(b[0] & 0xC0, 0xC0);
        assert_eq!(EmulatedAddress::random_static(b), Ok(EMULATED_ADDRESS));
    }

    #[test]
    fn test_rejects_non_static() {
        // Top bits 01: resolvable private address range
        assert_eq!(
            EmulatedAddress::random_static([0x5E, 0x9A, 0x3C, 0x1D, 0x87, 0x42]),
            Err(AddressError::NotStatic)
        );
        assert_eq!(
            EmulatedAddress::random_static([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            Err(AddressError::NotStatic)
        );
    }

    #[test]
    fn test_rejects_degenerate_random_part() {
        assert_eq!(
            EmulatedAddress::random_static([0xC0, 0, 0, 0, 0, 0]),
            Err(AddressError::AllZeros)
        );
        assert_eq!(
            EmulatedAddress::random_static([0xFF; 6]),
            Err(AddressError::AllOnes)
        );
        assert!(EmulatedAddress::random_static([0xC0, 0, 0, 0, 0, 1]).is_ok());
    }

    #[test]
    fn test_le_bytes_reverse_display_order() {
        assert_eq!(
            EMULATED_ADDRESS.to_le_bytes(),
            [0x42, 0x87, 0x1D, 0x3C, 0x9A, 0xDE]
        );
    }

    #[test]
    fn test_display() {
        let mut s: heapless::String<20> = heapless::String::new();
        write!(s, "{}", EMULATED_ADDRESS).unwrap();
        assert_eq!(s.as_str(), "DE:9A:3C:1D:87:42");
    }
}
