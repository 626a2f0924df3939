//! AD structure reader
//!
//! Walks `[len][type][data...]` elements. Reading stops at the first
//! zero-length element (padding) or at an element that runs past the end
//! of the buffer.

use super::AD_TYPE_MANUFACTURER_DATA;

/// Iterator over the AD structures of an advertisement
///
/// Yields `(ad_type, data)` pairs.
pub struct AdStructures<'a> {
    data: &'a [u8],
}

impl<'a> AdStructures<'a> {
    /// Start reading an advertisement
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Iterator for AdStructures<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.data.split_first()?;
        let len = len as usize;

        if len == 0 || len > rest.len() {
            self.data = &[];
            return None;
        }

        let (element, tail) = rest.split_at(len);
        self.data = tail;
        Some((element[0], &element[1..]))
    }
}

/// Decode the first Manufacturer Specific Data element
///
/// Returns the little-endian Company ID and the bytes following it.
pub fn manufacturer_data(adv: &[u8]) -> Option<(u16, &[u8])> {
    AdStructures::new(adv)
        .find(|(ty, data)| *ty == AD_TYPE_MANUFACTURER_DATA && data.len() >= 2)
        .map(|(_, data)| (u16::from_le_bytes([data[0], data[1]]), &data[2..]))
}
