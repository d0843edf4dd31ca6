//! CRC-16-CCITT checksum
//!
//! The CRC-16/CCITT-FALSE variant: polynomial 0x1021, initial value 0xFFFF,
//! no input or output reflection, no final XOR. Computed bit by bit so no
//! lookup table has to live in flash.

/// Initial value of the CRC register
pub const CRC_INIT: u16 = 0xFFFF;

/// Generator polynomial (x^16 + x^12 + x^5 + 1)
pub const CRC_POLY: u16 = 0x1021;

/// Incremental CRC-16-CCITT state
///
/// Feeding the input in several slices gives the same result as a single
/// call to [`crc16_ccitt`] over their concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc16 {
    crc: u16,
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc16 {
    /// Create a new CRC state
    pub const fn new() -> Self {
        Self { crc: CRC_INIT }
    }

    /// Feed bytes into the checksum
    pub fn update(mut self, data: &[u8]) -> Self {
        for &byte in data {
            self.crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                if self.crc & 0x8000 != 0 {
                    self.crc = (self.crc << 1) ^ CRC_POLY;
                } else {
                    self.crc <<= 1;
                }
            }
        }
        self
    }

    /// Current checksum value
    pub const fn finish(self) -> u16 {
        self.crc
    }
}

/// Calculate the CRC-16-CCITT of a byte slice
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    Crc16::new().update(data).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_vector() {
        assert_eq!(crc16_ccitt(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc16_ccitt(&[]), 0xFFFF);
        assert_eq!(Crc16::default().finish(), CRC_INIT);
    }

    #[test]
    fn test_single_byte() {
        // 0x00 shifted through eight rounds of the register
        assert_eq!(crc16_ccitt(&[0x00]), 0xE1F0);
    }

    #[test]
    fn test_incremental_matches_oneshot() {
        let crc = Crc16::new().update(b"1234").update(b"").update(b"56789").finish();
        assert_eq!(crc, 0x29B1);
    }

    proptest! {
        #[test]
        fn split_anywhere(
            data in proptest::collection::vec(any::<u8>(), 0..300),
            split in any::<usize>()
        ) {
            let at = split % (data.len() + 1);
            let (head, tail) = data.split_at(at);
            prop_assert_eq!(Crc16::new().update(head).update(tail).finish(), crc16_ccitt(&data));
        }
    }
}
