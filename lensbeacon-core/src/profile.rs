//! Device profile table
//!
//! One entry per emulated smart-glasses manufacturer. The table is a
//! `static` array indexed by the closed [`DeviceIndex`] enum, so every
//! lookup is total and no index can fall outside the table.

/// Number of emulated manufacturers
pub const DEVICE_COUNT: usize = 4;

/// One emulated manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceProfile {
    /// Name that fits in the menu list
    pub short_name: &'static str,
    /// Name shown on the advertising screen
    pub long_name: &'static str,
    /// Human-readable Company ID
    pub company_id_label: &'static str,
    /// Bluetooth SIG Company ID (sent little-endian)
    pub company_id: u16,
}

/// Index into the profile table
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceIndex {
    /// 0x058E Meta Platforms Technologies, LLC
    #[default]
    MetaTech = 0,
    /// 0x01AB Meta Platforms, Inc.
    MetaInc = 1,
    /// 0x0D53 EssilorLuxottica (manufactures Ray-Ban)
    Luxottica = 2,
    /// 0x03C2 Snapchat, Inc. (Snap Spectacles)
    SnapSpectacles = 3,
}

static DEVICES: [DeviceProfile; DEVICE_COUNT] = [
    DeviceProfile {
        short_name: "Meta Tech",
        long_name: "Meta Platforms Tech",
        company_id_label: "0x058E",
        company_id: 0x058E,
    },
    DeviceProfile {
        short_name: "Meta Inc.",
        long_name: "Meta Platforms, Inc.",
        company_id_label: "0x01AB",
        company_id: 0x01AB,
    },
    DeviceProfile {
        short_name: "Luxottica",
        long_name: "EssilorLuxottica",
        company_id_label: "0x0D53",
        company_id: 0x0D53,
    },
    DeviceProfile {
        short_name: "Snap Spectacles",
        long_name: "Snapchat, Inc.",
        company_id_label: "0x03C2",
        company_id: 0x03C2,
    },
];

impl DeviceIndex {
    /// All entries in table order
    pub const ALL: [DeviceIndex; DEVICE_COUNT] = [
        DeviceIndex::MetaTech,
        DeviceIndex::MetaInc,
        DeviceIndex::Luxottica,
        DeviceIndex::SnapSpectacles,
    ];

    /// Convert an untrusted integer into an index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Position in the table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Profile stored at this index
    pub fn profile(self) -> &'static DeviceProfile {
        &DEVICES[self.index()]
    }

    /// Next entry, wrapping from the last back to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % DEVICE_COUNT]
    }

    /// Previous entry, wrapping from the first to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + DEVICE_COUNT - 1) % DEVICE_COUNT]
    }
}

/// Look up a profile
pub fn profile_at(index: DeviceIndex) -> &'static DeviceProfile {
    index.profile()
}

/// Iterate over the whole table in index order
pub fn profiles() -> impl Iterator<Item = (DeviceIndex, &'static DeviceProfile)> {
    DeviceIndex::ALL.into_iter().map(|i| (i, i.profile()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, index) in DeviceIndex::ALL.iter().enumerate() {
            assert_eq!(index.index(), i);
            assert_eq!(DeviceIndex::from_index(i as u8), Some(*index));
        }
        assert_eq!(DeviceIndex::from_index(DEVICE_COUNT as u8), None);
        assert_eq!(DeviceIndex::from_index(0xFF), None);
    }

    #[test]
    fn test_luxottica_entry() {
        let p = profile_at(DeviceIndex::Luxottica);
        assert_eq!(p.short_name, "Luxottica");
        assert_eq!(p.long_name, "EssilorLuxottica");
        assert_eq!(p.company_id, 0x0D53);
        assert_eq!(p.company_id_label, "0x0D53");
    }

    #[test]
    fn test_labels_match_company_ids() {
        for (_, p) in profiles() {
            let label = p.company_id_label.trim_start_matches("0x");
            assert_eq!(u16::from_str_radix(label, 16), Ok(p.company_id));
        }
    }

    #[test]
    fn test_company_ids_are_unique() {
        for (a, pa) in profiles() {
            for (b, pb) in profiles() {
                if a != b {
                    assert_ne!(pa.company_id, pb.company_id);
                }
            }
        }
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(DeviceIndex::MetaTech.previous(), DeviceIndex::SnapSpectacles);
        assert_eq!(DeviceIndex::SnapSpectacles.next(), DeviceIndex::MetaTech);
        assert_eq!(DeviceIndex::default(), DeviceIndex::MetaTech);
    }

    proptest! {
        #[test]
        fn next_then_previous_is_identity(i in 0u8..DEVICE_COUNT as u8) {
            let index = DeviceIndex::from_index(i).unwrap();
            prop_assert_eq!(index.next().previous(), index);
            prop_assert_eq!(index.previous().next(), index);
        }

        #[test]
        fn full_cycle_returns_home(i in 0u8..DEVICE_COUNT as u8) {
            let start = DeviceIndex::from_index(i).unwrap();
            let mut index = start;
            for _ in 0..DEVICE_COUNT {
                index = index.next();
            }
            prop_assert_eq!(index, start);
        }
    }
}
