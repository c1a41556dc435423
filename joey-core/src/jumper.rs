//! Jumper readback
//!
//! The Joey backpack wires three solder jumpers (JP1-JP3) to key-scan row
//! 0 of the HT16K33. Reading that row's key data returns the jumper states
//! in the low three bits of the second byte; a closed (bridged) jumper
//! reads as 1.

use crate::command::reg;

/// Key-scan row the jumpers are wired to
pub const JUMPER_ROW: u8 = 0;

/// Number of jumpers on the board
pub const JUMPER_COUNT: u8 = 3;

/// Key data register for a scan row
///
/// Each row occupies two registers starting at `0x40`.
pub const fn key_register(row: u8) -> u8 {
    reg::KEY_DATA.wrapping_add(row.wrapping_mul(2))
}

/// Whether jumper `number` (1-3) is closed in `key_bits`
///
/// Any other jumper number reads as open.
pub const fn is_jumper_closed(number: u8, key_bits: u8) -> bool {
    if number >= 1 && number <= JUMPER_COUNT {
        key_bits & (1 << (number - 1)) != 0
    } else {
        false
    }
}

/// Jumper states read from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Jumpers(u8);

impl Jumpers {
    /// Wrap a raw key data byte
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw key data byte
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Whether jumper `number` (1-3) is closed
    pub const fn is_closed(&self, number: u8) -> bool {
        is_jumper_closed(number, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_register() {
        assert_eq!(key_register(0), 0x40);
        assert_eq!(key_register(1), 0x42);
        assert_eq!(key_register(2), 0x44);
    }

    #[test]
    fn test_jumper_closed() {
        assert!(is_jumper_closed(1, 0b001));
        assert!(!is_jumper_closed(2, 0b001));
        assert!(is_jumper_closed(2, 0b010));
        assert!(is_jumper_closed(3, 0b100));
        assert!(!is_jumper_closed(0, 0xFF));
        assert!(!is_jumper_closed(4, 0xFF));
    }

    #[test]
    fn test_jumpers_wrapper() {
        let jumpers = Jumpers::from_bits(0b101);
        assert_eq!(jumpers.bits(), 0b101);
        assert!(jumpers.is_closed(1));
        assert!(!jumpers.is_closed(2));
        assert!(jumpers.is_closed(3));

        assert!(!Jumpers::default().is_closed(1));
    }

    proptest! {
        #[test]
        fn out_of_range_jumpers_are_open(number in 4u8..=255, bits in any::<u8>()) {
            prop_assert!(!is_jumper_closed(number, bits));
        }

        #[test]
        fn jumper_matches_its_bit(number in 1u8..=3, bits in any::<u8>()) {
            prop_assert_eq!(is_jumper_closed(number, bits), bits >> (number - 1) & 1 == 1);
        }
    }
}
