//! HT16K33 command set
//!
//! Every command is a single byte written to the device address. The upper
//! nibble selects the register and the lower nibble carries the argument.
//!
//! | Command      | Byte                          |
//! |--------------|-------------------------------|
//! | Oscillator   | `0x21`                        |
//! | Display/blink| `0x80 \| on \| (rate << 1)`   |
//! | Brightness   | `0xE0 \| level`               |
//! | Display RAM  | `0x00` + 16 data bytes        |
//! | Key data     | `0x40 + row * 2`, read 2 bytes|

use crate::config::{clamp_brightness, BlinkRate};

/// HT16K33 register addresses and flags
pub mod reg {
    /// Display RAM start address
    pub const DISPLAY_RAM: u8 = 0x00;
    /// System setup register with the oscillator enable bit set
    pub const OSCILLATOR_ON: u8 = 0x21;
    /// Display setup (blink) register
    pub const BLINK: u8 = 0x80;
    /// Display-on flag within the blink register
    pub const BLINK_DISPLAY_ON: u8 = 0x01;
    /// Dimming (brightness) register
    pub const BRIGHTNESS: u8 = 0xE0;
    /// First key data register (row 0)
    pub const KEY_DATA: u8 = 0x40;
}

/// Oscillator enable command
pub const fn oscillator_on() -> u8 {
    reg::OSCILLATOR_ON
}

/// Brightness command, level clamped to 0-15
pub const fn brightness(level: u8) -> u8 {
    reg::BRIGHTNESS | clamp_brightness(level)
}

/// Blink command, which also turns the display on
pub const fn blink(rate: BlinkRate) -> u8 {
    reg::BLINK | reg::BLINK_DISPLAY_ON | ((rate as u8) << 1)
}

/// Degenerate blink command used for blanking
///
/// This writes the same register as [`blink`] with only the display-on bit
/// driven by `enabled`, so it discards any configured blink rate. Mixing
/// the two and expecting independent state will not work: the last one
/// written wins.
pub const fn blank(enabled: bool) -> u8 {
    reg::BLINK | enabled as u8
}
