//! Mock I2C bus for driver tests

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use heapless::Vec;

/// Longest write the drivers issue (display RAM flush)
const MAX_WRITE: usize = 17;

/// Most writes a single test records
const MAX_WRITES: usize = 32;

/// One recorded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub address: u8,
    pub bytes: Vec<u8, MAX_WRITE>,
}

/// Records writes and answers reads with canned key data
pub struct MockI2c {
    pub writes: Vec<Write, MAX_WRITES>,
    pub key_data: [u8; 2],
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            key_data: [0; 2],
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn with_key_data(key_data: [u8; 2]) -> Self {
        Self {
            key_data,
            ..Self::new()
        }
    }

    /// Bytes of the n-th write
    pub fn bytes(&self, n: usize) -> &[u8] {
        &self.writes[n].bytes
    }

    /// Bytes of the most recent write
    pub fn last(&self) -> &[u8] {
        &self.writes[self.writes.len() - 1].bytes
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if self.fail_writes {
                        return Err(ErrorKind::Other);
                    }
                    let bytes = Vec::from_slice(bytes).map_err(|_| ErrorKind::Other)?;
                    self.writes
                        .push(Write { address, bytes })
                        .map_err(|_| ErrorKind::Other)?;
                }
                Operation::Read(buf) => {
                    if self.fail_reads {
                        return Err(ErrorKind::Other);
                    }
                    for (dst, src) in buf.iter_mut().zip(self.key_data.iter()) {
                        *dst = *src;
                    }
                }
            }
        }
        Ok(())
    }
}
