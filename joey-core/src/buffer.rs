//! Display frame buffer
//!
//! The HT16K33 holds 16 bytes of display RAM. On the Joey backpack those
//! bytes are treated as 8 little-endian words, one per display position.
//! Nothing here touches the bus; the driver sends [`FrameBuffer::to_bytes`]
//! when the caller flushes.
//!
//! # Slot Layout
//!
//! | Slot | Use                                 |
//! |------|-------------------------------------|
//! | 1    | Digit 1 (leftmost)                  |
//! | 5    | Digit 2                             |
//! | 7    | Digit 3                             |
//! | 0    | Digit 4 (rightmost)                 |
//! | 4    | Degree dot (bit 3)                  |
//! | 6    | Colon (bit 4)                       |
//! | 2, 3 | Reserved                            |
//!
//! Any slot can carry a decimal point in bit 11.

use crate::command::reg;
use crate::font::{self, MINUS};

/// Number of words in the frame buffer
pub const BUFFER_LEN: usize = 8;

/// Bytes sent on flush: start address plus two bytes per word
pub const WIRE_LEN: usize = 1 + BUFFER_LEN * 2;

/// Physical digit slots, left to right
pub const DIGIT_SLOTS: [usize; 4] = [1, 5, 7, 0];

/// Slot carrying the degree dot
pub const DEGREE_SLOT: usize = 4;
/// Degree dot bit within [`DEGREE_SLOT`]
pub const DEGREE_BIT: u16 = 1 << 3;

/// Slot carrying the colon
pub const COLON_SLOT: usize = 6;
/// Colon bit within [`COLON_SLOT`]
pub const COLON_BIT: u16 = 1 << 4;

/// Decimal point bit, valid in every slot
pub const DECIMAL_POINT_BIT: u16 = 1 << 11;

/// Slot skipped by the print cursor and the number formatter
pub const RESERVED_SLOT: usize = 2;

/// Slots written with '-' by the error pattern
const ERROR_SLOTS: [usize; 4] = [0, 1, 5, 7];

/// In-memory mirror of the display RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer {
    words: [u16; BUFFER_LEN],
}

impl FrameBuffer {
    /// Create an empty (all segments off) buffer
    pub const fn new() -> Self {
        Self {
            words: [0; BUFFER_LEN],
        }
    }

    /// Get the word at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<u16> {
        self.words.get(index).copied()
    }

    /// All 8 words in slot order
    pub fn words(&self) -> &[u16; BUFFER_LEN] {
        &self.words
    }

    /// Turn every segment off
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Store a raw segment mask. Out of range indices are ignored.
    pub fn set_raw(&mut self, index: usize, mask: u16) {
        if let Some(word) = self.words.get_mut(index) {
            *word = mask;
        }
    }

    /// Store the font glyph for an ASCII byte
    pub fn set_ascii(&mut self, index: usize, ch: u8) {
        self.set_raw(index, font::glyph(ch));
    }

    /// Store the glyph for a digit value, optionally with its decimal point
    ///
    /// Values 10-15 draw as the hex letters A-F.
    pub fn set_digit(&mut self, index: usize, digit: u8, dot: bool) {
        let mut mask = font::digit_glyph(digit);
        if dot {
            mask |= DECIMAL_POINT_BIT;
        }
        self.set_raw(index, mask);
    }

    /// Set or clear individual bits, leaving the rest of the word alone
    pub fn set_bits(&mut self, index: usize, bits: u16, on: bool) {
        if let Some(word) = self.words.get_mut(index) {
            if on {
                *word |= bits;
            } else {
                *word &= !bits;
            }
        }
    }

    /// Show or hide the colon
    pub fn set_colon(&mut self, on: bool) {
        self.set_bits(COLON_SLOT, COLON_BIT, on);
    }

    /// Show or hide the degree dot
    pub fn set_degree(&mut self, on: bool) {
        self.set_bits(DEGREE_SLOT, DEGREE_BIT, on);
    }

    /// Show or hide the decimal point of a slot
    pub fn set_decimal_point(&mut self, index: usize, on: bool) {
        self.set_bits(index, DECIMAL_POINT_BIT, on);
    }

    /// Draw the "cannot display" pattern
    ///
    /// Dashes on all four digits, degree dot and colon slots cleared. Slots
    /// 2 and 3 are left untouched.
    pub fn set_error(&mut self) {
        for slot in ERROR_SLOTS {
            self.set_raw(slot, MINUS);
        }
        self.set_raw(DEGREE_SLOT, 0);
        self.set_raw(COLON_SLOT, 0);
    }

    /// Serialize for a single display RAM write
    ///
    /// Start address first, then each word low byte then high byte, in
    /// slot order 0-7.
    pub fn to_bytes(&self) -> [u8; WIRE_LEN] {
        let mut bytes = [0u8; WIRE_LEN];
        bytes[0] = reg::DISPLAY_RAM;
        for (chunk, word) in bytes[1..].chunks_exact_mut(2).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }
}
