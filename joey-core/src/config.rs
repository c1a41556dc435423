//! Backpack configuration types
//!
//! These types describe how a backpack is wired and how it should come up
//! after initialization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default I2C address (no address pads bridged)
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Maximum brightness level
pub const MAX_BRIGHTNESS: u8 = 15;

/// Clamp a brightness level to 0-15
pub const fn clamp_brightness(level: u8) -> u8 {
    if level > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        level
    }
}

/// Build an I2C address from the three address select pads
///
/// Bit 0-2 of `pads` correspond to pads A0-A2; a bridged pad sets its bit.
/// The result is always in `0x70..=0x77`.
pub const fn address_from_pads(pads: u8) -> u8 {
    DEFAULT_ADDRESS | (pads & 0x07)
}

/// Display blink rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady display
    #[default]
    Off = 0,
    /// Blink at 2 Hz
    TwoHz = 1,
    /// Blink at 1 Hz
    OneHz = 2,
    /// Blink at 0.5 Hz
    HalfHz = 3,
}

impl From<u8> for BlinkRate {
    /// Anything outside 0-3 turns blinking off
    fn from(value: u8) -> Self {
        match value {
            1 => BlinkRate::TwoHz,
            2 => BlinkRate::OneHz,
            3 => BlinkRate::HalfHz,
            _ => BlinkRate::Off,
        }
    }
}

/// Backpack configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackpackConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Brightness applied by init (0-15)
    pub brightness: u8,
    /// Blink rate applied by init
    pub blink_rate: BlinkRate,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl BackpackConfig {
    /// Full brightness, no blinking, at the given address
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            brightness: MAX_BRIGHTNESS,
            blink_rate: BlinkRate::Off,
        }
    }

    /// Address selected by the address pads (see [`address_from_pads`])
    pub const fn with_address_pads(pads: u8) -> Self {
        Self::new(address_from_pads(pads))
    }

    /// Set the initial brightness (clamped to 0-15)
    pub const fn with_brightness(mut self, level: u8) -> Self {
        self.brightness = clamp_brightness(level);
        self
    }

    /// Set the initial blink rate
    pub const fn with_blink_rate(mut self, rate: BlinkRate) -> Self {
        self.blink_rate = rate;
        self
    }
}
