//! Print-style character cursor
//!
//! Sequential single-character output, used for streaming numeric
//! telemetry with `write!`. Only the digits `0`-`9` are drawn; any other
//! byte still takes up a position but leaves it untouched. `\r` and `\n`
//! return the cursor to position 0 without using a position.
//!
//! Letters are deliberately not drawn here even though the font has many
//! of them; use [`FrameBuffer::set_ascii`] to place letters.

use crate::buffer::{FrameBuffer, BUFFER_LEN, RESERVED_SLOT};

/// Write position for character-at-a-time output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Cursor at position 0
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Current position
    ///
    /// [`BUFFER_LEN`] means the cursor ran off the end; writes are dropped
    /// until the next [`reset`](Self::reset).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return to position 0
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Feed one byte
    ///
    /// Returns 1 for a digit and 0 for anything else. A digit arriving after
    /// the cursor ran off the end still counts but is not drawn.
    pub fn write(&mut self, byte: u8, buffer: &mut FrameBuffer) -> usize {
        if matches!(byte, b'\r' | b'\n') {
            self.reset();
            return 0;
        }

        let consumed = if byte.is_ascii_digit() {
            buffer.set_digit(self.position, byte - b'0', false);
            1
        } else {
            0
        };

        self.advance();
        consumed
    }

    fn advance(&mut self) {
        self.position = (self.position + 1).min(BUFFER_LEN);
        if self.position == RESERVED_SLOT {
            self.position += 1;
        }
    }
}
