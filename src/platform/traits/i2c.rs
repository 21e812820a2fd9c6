//! I2C interface trait
//!
//! This module defines the I2C bus interface that register-addressed sensors consume.

use crate::platform::Result;

/// I2C interface trait
///
/// Collaborator implementations must provide this interface for I2C bus communication.
/// Device-select, repeated START and acknowledge handling belong to the implementation.
///
/// # Safety Invariants
///
/// - I2C peripheral must be initialized before use
/// - Only one owner per I2C bus instance
/// - No concurrent access to the same I2C bus from multiple contexts
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait I2cInterface {
    /// Write data to I2C device
    ///
    /// Performs a complete I2C write transaction:
    /// START - ADDR(W) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge or the bus faults.
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Read data from I2C device
    ///
    /// Performs a complete I2C read transaction:
    /// START - ADDR(R) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge or the bus faults.
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()>;

    /// Write then read from I2C device
    ///
    /// Performs a combined write-read transaction with a repeated START:
    /// START - ADDR(W) - WRITE_DATA - REPEATED_START - ADDR(R) - READ_DATA - STOP
    ///
    /// This is commonly used to write a register address then read the register value.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge or the bus faults.
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;

    /// Write a single register: `[reg, value]`
    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<()> {
        self.write(addr, &[reg, value])
    }

    /// Read a single register
    fn read_register(&mut self, addr: u8, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.write_read(addr, &[reg], &mut buf)?;
        Ok(buf[0])
    }
}

impl<T: I2cInterface + ?Sized> I2cInterface for &mut T {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        (**self).write(addr, data)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(addr, buffer)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        (**self).write_read(addr, write_data, read_buffer)
    }
}
