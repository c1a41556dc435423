//! Hardware drivers for the Joey backpack
//!
//! This crate talks to the HT16K33 over any bus implementing
//! [`embedded_hal::i2c::I2c`]:
//!
//! - [`Ht16k33`]: raw controller (command set, frame buffer, key scan)
//! - [`SevenSegment`]: 4-digit renderer built on top of the controller
//!
//! Display changes only reach the LEDs on `write_display()`.
//!
//! # Example
//!
//! ```ignore
//! use core::fmt::Write;
//! use joey_drivers::SevenSegment;
//! use joey_core::{Number, NumberFormat};
//!
//! let mut display = SevenSegment::new(i2c, 0x70);
//! display.init()?;
//!
//! display.print(Number::Float(21.5), NumberFormat::decimal(1));
//! display.draw_degree(true);
//! display.write_display()?;
//!
//! if display.jumpers().is_closed(1) {
//!     display.set_brightness(4)?;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ht16k33;
pub mod seven_segment;

#[cfg(test)]
mod mock;

pub use ht16k33::Ht16k33;
pub use seven_segment::SevenSegment;
