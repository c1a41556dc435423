//! HT16K33 LED controller
//!
//! Owns the bus handle and the 8-word frame buffer for one device. All
//! commands are single-byte writes; the frame buffer goes out in one
//! 17-byte write on [`Ht16k33::write_display`].
//!
//! # Initialization
//!
//! ```text
//! 0x21        oscillator on
//! 0x80 | ...  display on, configured blink rate (default off -> 0x81)
//! 0xE0 | ...  configured brightness (default 15 -> 0xEF)
//! ```
//!
//! Bus errors from the transport are passed back untouched. Invalid
//! arguments never fail: brightness is clamped and blink rates outside
//! 0-3 mean "off" (see [`BlinkRate`]).

use embedded_hal::i2c::I2c;
use joey_core::command;
use joey_core::jumper::key_register;
use joey_core::{BackpackConfig, BlinkRate, FrameBuffer};

/// HT16K33 controller driver
pub struct Ht16k33<I2C> {
    i2c: I2C,
    config: BackpackConfig,
    buffer: FrameBuffer,
}

impl<I2C: I2c> Ht16k33<I2C> {
    /// Create a driver for the device at `address`
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::with_config(i2c, BackpackConfig::new(address))
    }

    /// Create a driver with explicit startup settings
    pub fn with_config(i2c: I2C, config: BackpackConfig) -> Self {
        Self {
            i2c,
            config,
            buffer: FrameBuffer::new(),
        }
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Startup settings
    pub fn config(&self) -> &BackpackConfig {
        &self.config
    }

    /// Start the oscillator and apply the configured blink rate and brightness
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.command(command::oscillator_on())?;
        self.set_blink_rate(self.config.blink_rate)?;
        self.set_brightness(self.config.brightness)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HT16K33 at {=u8:#x} initialized", self.config.address);

        Ok(())
    }

    /// Set brightness (0-15, larger values clamp to 15)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), I2C::Error> {
        self.command(command::brightness(level))
    }

    /// Turn the display on with the given blink rate
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), I2C::Error> {
        self.command(command::blink(rate))
    }

    /// Write the display register with only the on/off bit
    ///
    /// This shares a register with [`set_blink_rate`](Self::set_blink_rate)
    /// and resets the blink rate to off. Whichever of the two was called
    /// last decides what the display does.
    pub fn blank(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        self.command(command::blank(enabled))
    }

    /// Turn every segment off in the frame buffer (no bus traffic)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Send the whole frame buffer to the display
    pub fn write_display(&mut self) -> Result<(), I2C::Error> {
        let bytes = self.buffer.to_bytes();
        self.i2c.write(self.config.address, &bytes)
    }

    /// Frame buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Mutable frame buffer
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Read the key data of a scan row
    ///
    /// Returns the second of the row's two key data bytes. A failed read
    /// returns 0 rather than an error.
    pub fn key_row(&mut self, row: u8) -> u8 {
        let mut data = [0u8; 2];
        match self
            .i2c
            .write_read(self.config.address, &[key_register(row)], &mut data)
        {
            Ok(()) => data[1],
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "HT16K33 key row {} read failed: {:?}",
                    row,
                    defmt::Debug2Format(&_e)
                );
                0
            }
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.config.address, &[byte])
    }
}
