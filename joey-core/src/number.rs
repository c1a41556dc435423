//! Numeric formatting
//!
//! Renders an integer or float into the four digit positions of the
//! frame buffer in any base from 2 to 16.
//!
//! # Algorithm
//!
//! The value is scaled by `base^fraction_digits` and rounded so all
//! wanted fractional digits become part of one integer. If that integer
//! has more digits than the display, fractional digits are dropped one at
//! a time. If it still does not fit with no fractional digits, the error
//! pattern is drawn instead.
//!
//! Digits are written right to left starting at buffer position 4, with
//! position 2 skipped (and blanked). A negative value spends one position
//! on the minus sign.

use crate::buffer::{FrameBuffer, RESERVED_SLOT};
use crate::font::MINUS;

/// Binary
pub const BIN: u8 = 2;
/// Octal
pub const OCT: u8 = 8;
/// Decimal
pub const DEC: u8 = 10;
/// Hexadecimal
pub const HEX: u8 = 16;

/// Smallest supported base
pub const MIN_BASE: u8 = 2;
/// Largest supported base
pub const MAX_BASE: u8 = 16;

/// Digit positions available to the formatter
const DISPLAY_DIGITS: u32 = 4;

/// Buffer position of the rightmost digit
const FIRST_POSITION: i16 = 4;

/// A value to render
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Number {
    /// Signed integer
    Integer(i32),
    /// Floating point
    Float(f32),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(f) => f as f64,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value)
    }
}

/// How to render a [`Number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NumberFormat {
    /// Base (2-16); out of range values are clamped
    pub base: u8,
    /// Wanted digits after the point; reduced automatically to fit
    pub fraction_digits: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::decimal(0)
    }
}

impl NumberFormat {
    /// Whole number in the given base
    pub const fn integer(base: u8) -> Self {
        Self {
            base,
            fraction_digits: 0,
        }
    }

    /// Base 10 with up to `fraction_digits` after the point
    pub const fn decimal(fraction_digits: u8) -> Self {
        Self {
            base: DEC,
            fraction_digits,
        }
    }

    /// Base clamped to 2-16
    pub const fn clamped_base(&self) -> u8 {
        if self.base < MIN_BASE {
            MIN_BASE
        } else if self.base > MAX_BASE {
            MAX_BASE
        } else {
            self.base
        }
    }
}

/// Scaled integer ready for display
struct Scaled {
    digits: u32,
    fraction_digits: u8,
}

/// Scale and round `magnitude`, dropping fractional digits until it fits
///
/// Returns `None` when even the integer part does not fit (or the value
/// is not finite).
fn fit(magnitude: f64, base: u8, mut fraction_digits: u8, available: u32) -> Option<Scaled> {
    let base_f = base as f64;
    let too_big = (base as u32).pow(available) as f64;

    let mut scale = 1.0;
    for _ in 0..fraction_digits {
        scale *= base_f;
    }

    loop {
        let rounded = magnitude * scale + 0.5;
        if rounded < too_big {
            return Some(Scaled {
                digits: rounded as u32,
                fraction_digits,
            });
        }
        if fraction_digits == 0 {
            return None;
        }
        fraction_digits -= 1;
        scale /= base_f;
    }
}

/// Write at a signed position, ignoring anything left of position 0
fn write_raw(buffer: &mut FrameBuffer, position: i16, mask: u16) {
    if let Ok(index) = usize::try_from(position) {
        buffer.set_raw(index, mask);
    }
}

fn write_digit(buffer: &mut FrameBuffer, position: i16, digit: u8, dot: bool) {
    if let Ok(index) = usize::try_from(position) {
        buffer.set_digit(index, digit, dot);
    }
}

/// Render `number` into the digit positions of `buffer`
///
/// Positions 0-4 are always rewritten. If the value cannot be shown the
/// error pattern is drawn (see [`FrameBuffer::set_error`]).
pub fn render(buffer: &mut FrameBuffer, number: Number, format: NumberFormat) {
    let base = format.clamped_base();
    let value = number.as_f64();

    let negative = value < 0.0;
    let (magnitude, available) = if negative {
        (-value, DISPLAY_DIGITS - 1)
    } else {
        (value, DISPLAY_DIGITS)
    };

    let Some(scaled) = fit(magnitude, base, format.fraction_digits, available) else {
        buffer.set_error();
        return;
    };

    let mut position = FIRST_POSITION;
    let mut remaining = scaled.digits;
    let fraction_digits = scaled.fraction_digits;
    let base = base as u32;

    if remaining == 0 {
        write_digit(buffer, position, 0, false);
        position -= 1;
    } else {
        let fraction_digits = u16::from(fraction_digits);
        let mut i = 0u16;
        while remaining != 0 || i <= fraction_digits {
            let dot = fraction_digits != 0 && i == fraction_digits;
            write_digit(buffer, position, (remaining % base) as u8, dot);
            position -= 1;
            if position == RESERVED_SLOT as i16 {
                write_raw(buffer, position, 0);
                position -= 1;
            }
            remaining /= base;
            i += 1;
        }
    }

    if negative {
        write_raw(buffer, position, MINUS);
        position -= 1;
    }

    while position >= 0 {
        write_raw(buffer, position, 0);
        position -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::DECIMAL_POINT_BIT;
    use crate::font::{digit_glyph, glyph};
    use proptest::prelude::*;

    fn rendered(number: Number, format: NumberFormat) -> [u16; 8] {
        let mut buffer = FrameBuffer::new();
        render(&mut buffer, number, format);
        *buffer.words()
    }

    fn error_pattern() -> [u16; 8] {
        let mut buffer = FrameBuffer::new();
        buffer.set_error();
        *buffer.words()
    }

    #[test]
    fn test_single_digit() {
        let words = rendered(Number::Integer(8), NumberFormat::integer(DEC));
        assert_eq!(words[4], digit_glyph(8));
        assert_eq!(&words[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_integer() {
        let words = rendered(Number::Integer(-5), NumberFormat::integer(DEC));
        assert_eq!(words[4], digit_glyph(5));
        assert_eq!(words[3], 0x40);
        assert_eq!(&words[0..3], &[0, 0, 0]);
    }

    #[test]
    fn test_zero() {
        let words = rendered(Number::Integer(0), NumberFormat::integer(DEC));
        assert_eq!(words[4], digit_glyph(0));
        assert_eq!(&words[0..4], &[0, 0, 0, 0]);

        // Rounds to zero with fractional digits requested: still one '0'
        let words = rendered(Number::Float(0.001), NumberFormat::decimal(2));
        assert_eq!(words[4], digit_glyph(0));
        assert_eq!(&words[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_float_with_decimal_point() {
        let words = rendered(Number::Float(3.14), NumberFormat::decimal(2));
        assert_eq!(words[4], digit_glyph(4));
        assert_eq!(words[3], digit_glyph(1));
        assert_eq!(words[2], 0);
        assert_eq!(words[1], digit_glyph(3) | DECIMAL_POINT_BIT);
        assert_eq!(words[0], 0);
    }

    #[test]
    fn test_leading_fraction_zero() {
        // 0.05 -> "0.05"
        let words = rendered(Number::Float(0.05), NumberFormat::decimal(2));
        assert_eq!(words[4], digit_glyph(5));
        assert_eq!(words[3], digit_glyph(0));
        assert_eq!(words[1], digit_glyph(0) | DECIMAL_POINT_BIT);
        assert_eq!(words[0], 0);
    }

    #[test]
    fn test_drops_fraction_digits_to_fit() {
        // 123.456 with 3 fraction digits needs 6 digits; only 123.5 fits
        let words = rendered(Number::Float(123.456), NumberFormat::decimal(3));
        assert_eq!(words[4], digit_glyph(5));
        assert_eq!(words[3], digit_glyph(3) | DECIMAL_POINT_BIT);
        assert_eq!(words[1], digit_glyph(2));
        assert_eq!(words[0], digit_glyph(1));
    }

    #[test]
    fn test_rounding() {
        let words = rendered(Number::Float(2.5), NumberFormat::decimal(0));
        assert_eq!(words[4], digit_glyph(3));

        let words = rendered(Number::Float(9.996), NumberFormat::decimal(2));
        // 999.6 rounds to 1000 with two digits -> "10.00"
        assert_eq!(words[4], digit_glyph(0));
        assert_eq!(words[3], digit_glyph(0));
        assert_eq!(words[1], digit_glyph(0) | DECIMAL_POINT_BIT);
        assert_eq!(words[0], digit_glyph(1));
    }

    #[test]
    fn test_largest_values() {
        let words = rendered(Number::Integer(9999), NumberFormat::integer(DEC));
        assert_eq!(words[4], digit_glyph(9));
        assert_eq!(words[3], digit_glyph(9));
        assert_eq!(words[1], digit_glyph(9));
        assert_eq!(words[0], digit_glyph(9));

        let words = rendered(Number::Integer(-999), NumberFormat::integer(DEC));
        assert_eq!(words[0], 0x40);
        assert_eq!(words[1], digit_glyph(9));
    }

    #[test]
    fn test_overflow_shows_error() {
        assert_eq!(
            rendered(Number::Integer(10_000), NumberFormat::integer(DEC)),
            error_pattern()
        );
        assert_eq!(
            rendered(Number::Integer(-1000), NumberFormat::integer(DEC)),
            error_pattern()
        );
        assert_eq!(
            rendered(Number::Float(12345.6), NumberFormat::decimal(2)),
            error_pattern()
        );
        assert_eq!(
            rendered(Number::Float(f32::INFINITY), NumberFormat::decimal(1)),
            error_pattern()
        );
        assert_eq!(
            rendered(Number::Float(f32::NAN), NumberFormat::decimal(1)),
            error_pattern()
        );
    }

    #[test]
    fn test_hexadecimal() {
        let words = rendered(Number::Integer(0xBEEF), NumberFormat::integer(HEX));
        assert_eq!(words[4], glyph(b'F'));
        assert_eq!(words[3], glyph(b'E'));
        assert_eq!(words[1], glyph(b'E'));
        assert_eq!(words[0], glyph(b'B'));
    }

    #[test]
    fn test_binary() {
        let words = rendered(Number::Integer(0b101), NumberFormat::integer(BIN));
        assert_eq!(words[4], digit_glyph(1));
        assert_eq!(words[3], digit_glyph(0));
        assert_eq!(words[1], digit_glyph(1));
        assert_eq!(words[0], 0);

        // 16 needs five binary digits
        assert_eq!(
            rendered(Number::Integer(16), NumberFormat::integer(BIN)),
            error_pattern()
        );
    }

    #[test]
    fn test_base_is_clamped() {
        assert_eq!(NumberFormat::integer(0).clamped_base(), 2);
        assert_eq!(NumberFormat::integer(1).clamped_base(), 2);
        assert_eq!(NumberFormat::integer(99).clamped_base(), 16);
        assert_eq!(
            rendered(Number::Integer(255), NumberFormat::integer(200)),
            rendered(Number::Integer(255), NumberFormat::integer(HEX))
        );
    }

    #[test]
    fn test_untouched_slots() {
        let mut buffer = FrameBuffer::new();
        buffer.set_colon(true);
        buffer.set_raw(5, 0x1111);
        buffer.set_raw(7, 0x2222);

        render(&mut buffer, Number::Integer(42), NumberFormat::default());

        assert_eq!(buffer.get(5), Some(0x1111));
        assert_eq!(buffer.get(6), Some(1 << 4));
        assert_eq!(buffer.get(7), Some(0x2222));
    }

    proptest! {
        #[test]
        fn decimal_integers_in_range_render_their_digits(n in 0i32..10_000) {
            let words = rendered(Number::Integer(n), NumberFormat::integer(DEC));
            let ones = (n % 10) as u8;
            prop_assert_eq!(words[4], digit_glyph(ones));
            prop_assert_eq!(words[2], 0);
        }

        #[test]
        fn out_of_range_integers_show_error(n in 10_000i32..=i32::MAX) {
            prop_assert_eq!(
                rendered(Number::Integer(n), NumberFormat::integer(DEC)),
                error_pattern()
            );
        }

        #[test]
        fn negative_values_in_range_carry_a_sign(n in -999i32..0) {
            let words = rendered(Number::Integer(n), NumberFormat::integer(DEC));
            prop_assert!(words.iter().any(|&w| w == 0x40));
        }
    }
}
