//! Mock I2C implementation for testing

use crate::platform::{
    Result,
    error::{I2cError, PlatformError},
    traits::I2cInterface,
};
use alloc::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C device with a 256-byte register file
///
/// Models a single register-addressed device: the first written byte sets
/// the register pointer, further bytes are stored with auto-increment, and
/// reads stream out from the pointer. All transactions are recorded for
/// test verification.
#[derive(Debug)]
pub struct MockI2c {
    address: u8,
    registers: [u8; 256],
    pointer: u8,
    transactions: Vec<I2cTransaction>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockI2c {
    /// Create a mock device answering at `address`
    pub fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; 256],
            pointer: 0,
            transactions: Vec::new(),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Preload a register value
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    /// Preload a big-endian 16-bit value into `high_reg` and `high_reg + 1`
    pub fn set_register_pair(&mut self, high_reg: u8, value: i16) {
        let [high, low] = value.to_be_bytes();
        self.registers[high_reg as usize] = high;
        self.registers[high_reg.wrapping_add(1) as usize] = low;
    }

    /// Current register value
    pub fn register(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    /// Make every read report that no data arrived
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every write go unacknowledged
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_address(&self, addr: u8) -> Result<()> {
        if addr == self.address {
            Ok(())
        } else {
            Err(PlatformError::I2c(I2cError::Nack))
        }
    }

    fn store(&mut self, data: &[u8]) {
        if let Some((&reg, payload)) = data.split_first() {
            self.pointer = reg;
            for &byte in payload {
                self.registers[self.pointer as usize] = byte;
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
    }

    fn stream_out(&mut self, buffer: &mut [u8]) -> Result<()> {
        if self.fail_reads {
            return Err(PlatformError::I2c(I2cError::NoData));
        }
        for byte in buffer.iter_mut() {
            *byte = self.registers[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        self.check_address(addr)?;
        if self.fail_writes {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        self.store(data);
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });
        self.check_address(addr)?;
        self.stream_out(buffer)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: write_data.to_vec(),
            read_len: read_buffer.len(),
        });
        self.check_address(addr)?;
        if let Some(&reg) = write_data.first() {
            self.pointer = reg;
        }
        self.stream_out(read_buffer)
    }
}
