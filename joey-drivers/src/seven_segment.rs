//! 4-digit 7-segment renderer
//!
//! Wraps an [`Ht16k33`] and draws characters, digits and numbers into its
//! frame buffer. The controller's own operations are forwarded so the
//! renderer can be used on its own.
//!
//! Nothing is shown until [`write_display`](SevenSegment::write_display).
//!
//! # Print-style output
//!
//! [`SevenSegment`] implements [`core::fmt::Write`], feeding every byte
//! through [`write_byte`](SevenSegment::write_byte):
//!
//! ```ignore
//! write!(display, "{}", reading)?;
//! writeln!(display)?; // back to position 0
//! ```
//!
//! Only digits are drawn on this path.

use core::fmt;

use embedded_hal::i2c::I2c;
use joey_core::jumper::{self, JUMPER_ROW};
use joey_core::number::{self, DEC};
use joey_core::{BackpackConfig, BlinkRate, Cursor, FrameBuffer, Jumpers, Number, NumberFormat};

use crate::ht16k33::Ht16k33;

/// 7-segment display on a Joey backpack
pub struct SevenSegment<I2C> {
    controller: Ht16k33<I2C>,
    cursor: Cursor,
}

impl<I2C: I2c> SevenSegment<I2C> {
    /// Create a renderer for the device at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::from_controller(Ht16k33::new(i2c, address))
    }

    /// Create a renderer with explicit startup settings
    pub fn with_config(i2c: I2C, config: BackpackConfig) -> Self {
        Self::from_controller(Ht16k33::with_config(i2c, config))
    }

    /// Wrap an existing controller
    pub fn from_controller(controller: Ht16k33<I2C>) -> Self {
        Self {
            controller,
            cursor: Cursor::new(),
        }
    }

    /// Underlying controller
    pub fn controller(&self) -> &Ht16k33<I2C> {
        &self.controller
    }

    /// Mutable underlying controller
    pub fn controller_mut(&mut self) -> &mut Ht16k33<I2C> {
        &mut self.controller
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.controller.release()
    }

    // Controller operations

    /// See [`Ht16k33::init`]
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.controller.init()
    }

    /// See [`Ht16k33::set_brightness`]
    pub fn set_brightness(&mut self, level: u8) -> Result<(), I2C::Error> {
        self.controller.set_brightness(level)
    }

    /// See [`Ht16k33::set_blink_rate`]
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), I2C::Error> {
        self.controller.set_blink_rate(rate)
    }

    /// See [`Ht16k33::blank`]
    pub fn blank(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        self.controller.blank(enabled)
    }

    /// See [`Ht16k33::clear`]
    pub fn clear(&mut self) {
        self.controller.clear();
    }

    /// See [`Ht16k33::write_display`]
    pub fn write_display(&mut self) -> Result<(), I2C::Error> {
        self.controller.write_display()
    }

    /// Frame buffer
    pub fn buffer(&self) -> &FrameBuffer {
        self.controller.buffer()
    }

    // Drawing

    /// Store a raw segment mask at `index` (ignored past 7)
    pub fn write_digit_raw(&mut self, index: usize, mask: u16) {
        self.buffer_mut().set_raw(index, mask);
    }

    /// Draw an ASCII character at `index` (ignored past 7)
    pub fn write_digit_ascii(&mut self, index: usize, ch: u8) {
        self.buffer_mut().set_ascii(index, ch);
    }

    /// Draw a digit value at `index`, optionally with its decimal point
    ///
    /// 0-9 draw as numerals and 10-15 as the hex letters A-F.
    pub fn write_digit_num(&mut self, index: usize, digit: u8, dot: bool) {
        self.buffer_mut().set_digit(index, digit, dot);
    }

    /// Show or hide the colon
    pub fn draw_colon(&mut self, on: bool) {
        self.buffer_mut().set_colon(on);
    }

    /// Show or hide the degree dot
    pub fn draw_degree(&mut self, on: bool) {
        self.buffer_mut().set_degree(on);
    }

    /// Show or hide the decimal point at `index` (ignored past 7)
    pub fn draw_decimal_point(&mut self, index: usize, on: bool) {
        self.buffer_mut().set_decimal_point(index, on);
    }

    // Numbers

    /// Render a number into the digit positions
    pub fn print(&mut self, value: Number, format: NumberFormat) {
        number::render(self.controller.buffer_mut(), value, format);
    }

    /// [`print`](Self::print), then return the cursor to position 0
    pub fn println(&mut self, value: Number, format: NumberFormat) {
        self.print(value, format);
        self.newline();
    }

    /// Render an integer in the given base
    pub fn print_number(&mut self, value: i32, base: u8) {
        self.print(Number::Integer(value), NumberFormat::integer(base));
    }

    /// Render a float with up to `fraction_digits` after the point
    pub fn print_float(&mut self, value: f32, fraction_digits: u8, base: u8) {
        self.print(
            Number::Float(value),
            NumberFormat {
                base,
                fraction_digits,
            },
        );
    }

    /// Render a decimal float with up to `fraction_digits` after the point
    pub fn print_decimal(&mut self, value: f32, fraction_digits: u8) {
        self.print_float(value, fraction_digits, DEC);
    }

    /// Draw the "cannot display" pattern (dashes, indicators off)
    pub fn print_error(&mut self) {
        self.buffer_mut().set_error();
    }

    // Character stream

    /// Feed one byte to the print cursor
    ///
    /// Digits are drawn at the cursor and return 1. Other bytes return 0
    /// and are not drawn; `\r` and `\n` move the cursor back to 0, anything
    /// else still uses up a position.
    pub fn write_byte(&mut self, byte: u8) -> usize {
        self.cursor.write(byte, self.controller.buffer_mut())
    }

    /// Move the print cursor back to position 0
    pub fn newline(&mut self) {
        self.cursor.reset();
    }

    /// Print cursor position
    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    // Jumpers

    /// Read the key data of a scan row (0 if the read fails)
    pub fn key_row(&mut self, row: u8) -> u8 {
        self.controller.key_row(row)
    }

    /// Read the jumper states
    pub fn jumpers(&mut self) -> Jumpers {
        Jumpers::from_bits(self.key_row(JUMPER_ROW))
    }

    /// Whether jumper `number` (1-3) is closed in `key_bits`
    pub fn is_jumper_closed(&self, number: u8, key_bits: u8) -> bool {
        jumper::is_jumper_closed(number, key_bits)
    }

    fn buffer_mut(&mut self) -> &mut FrameBuffer {
        self.controller.buffer_mut()
    }
}

impl<I2C: I2c> fmt::Write for SevenSegment<I2C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
