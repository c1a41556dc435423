//! Board-agnostic core logic for the Joey 7-segment backpack
//!
//! This crate contains everything that does not touch the I2C bus:
//!
//! - HT16K33 command byte encodings
//! - Backpack configuration (address, brightness, blink rate)
//! - The ASCII segment font
//! - The 8-word frame buffer and its slot layout
//! - Numeric formatting into display digits
//! - The print-style character cursor
//! - Jumper (key-scan) decoding
//!
//! # Display Layout
//!
//! ```text
//!       0
//!    +----+
//!  5 |  6 | 1
//!    +----+
//! 12 |    | 2
//!    +----+   o 11
//!      13
//! ```
//!
//! Each frame buffer word is one display position; bit `n` lights segment
//! `n` above. Buffer words `[1, 5, 7, 0]` are the four physical digits from
//! left to right, word 4 carries the degree dot and word 6 the colon.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod command;
pub mod config;
pub mod cursor;
pub mod font;
pub mod jumper;
pub mod number;

// Re-export key types at crate root for convenience
pub use buffer::FrameBuffer;
pub use config::{BackpackConfig, BlinkRate};
pub use cursor::Cursor;
pub use jumper::Jumpers;
pub use number::{Number, NumberFormat};
