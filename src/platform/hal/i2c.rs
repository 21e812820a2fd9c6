//! embedded-hal I2C adapter
//!
//! Wraps any blocking `embedded_hal::i2c::I2c` bus (1.0 API) so it can be
//! handed to the drivers as an [`I2cInterface`].
//!
//! # Example
//!
//! ```ignore
//! use motion_sense::platform::hal::HalI2c;
//! use motion_sense::devices::gyroscope::{Gyroscope, GyroscopeConfig};
//!
//! let bus = HalI2c::new(board_i2c);
//! let mut gyro = Gyroscope::new(bus, GyroscopeConfig::default())?;
//! gyro.configure();
//! ```

use crate::platform::{
    Result,
    error::{I2cError, PlatformError},
    traits::I2cInterface,
};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c as HalI2cBus};

/// `I2cInterface` implementation over an embedded-hal 1.0 bus
///
/// # Type Parameters
///
/// * `T` - Blocking I2C bus with 7-bit addressing
pub struct HalI2c<T> {
    bus: T,
}

impl<T: HalI2cBus> HalI2c<T> {
    /// Wrap a configured bus
    ///
    /// Bus frequency and pins are set up by the HAL before wrapping.
    pub fn new(bus: T) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> T {
        self.bus
    }
}

impl<T: HalI2cBus> I2cInterface for HalI2c<T> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        check_address(addr)?;
        self.bus.write(addr, data).map_err(|e| map_hal_error(e.kind()))
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.bus.read(addr, buffer).map_err(|e| map_hal_error(e.kind()))
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(|e| map_hal_error(e.kind()))
    }
}

/// Reject addresses outside the 7-bit range before touching the bus
fn check_address(addr: u8) -> Result<()> {
    if addr > 0x7F {
        return Err(PlatformError::I2c(I2cError::InvalidAddress));
    }
    Ok(())
}

/// Map embedded-hal error kinds to platform I2C errors
fn map_hal_error(kind: ErrorKind) -> PlatformError {
    match kind {
        ErrorKind::NoAcknowledge(_) => PlatformError::I2c(I2cError::Nack),
        ErrorKind::ArbitrationLoss => PlatformError::I2c(I2cError::ArbitrationLost),
        ErrorKind::Overrun => PlatformError::I2c(I2cError::NoData),
        _ => PlatformError::I2c(I2cError::BusError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Register-file bus answering every address
    struct FakeBus {
        registers: [u8; 8],
        pointer: usize,
        fail: Option<ErrorKind>,
        last_address: Option<u8>,
    }

    impl FakeBus {
        fn new() -> Self {
            Self {
                registers: [0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17],
                pointer: 0,
                fail: None,
                last_address: None,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = FakeError;
    }

    impl HalI2cBus for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> core::result::Result<(), Self::Error> {
            self.last_address = Some(address);
            if let Some(kind) = self.fail {
                return Err(FakeError(kind));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&reg, payload)) = bytes.split_first() {
                            self.pointer = reg as usize;
                            for &byte in payload {
                                self.registers[self.pointer] = byte;
                                self.pointer += 1;
                            }
                        }
                    }
                    Operation::Read(buffer) => {
                        for byte in buffer.iter_mut() {
                            *byte = self.registers[self.pointer];
                            self.pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_register_round_trip_through_adapter() {
        let mut i2c = HalI2c::new(FakeBus::new());
        i2c.write_register(0x69, 0x03, 0xAB).unwrap();
        assert_eq!(i2c.read_register(0x69, 0x03).unwrap(), 0xAB);
        assert_eq!(i2c.read_register(0x69, 0x05).unwrap(), 0x15);

        let bus = i2c.release();
        assert_eq!(bus.last_address, Some(0x69));
    }

    #[test]
    fn test_burst_read() {
        let mut i2c = HalI2c::new(FakeBus::new());
        let mut buf = [0u8; 3];
        i2c.write_read(0x69, &[0x02], &mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x13, 0x14]);
    }

    #[test]
    fn test_error_kinds_are_mapped() {
        let cases = [
            (
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
                I2cError::Nack,
            ),
            (ErrorKind::ArbitrationLoss, I2cError::ArbitrationLost),
            (ErrorKind::Overrun, I2cError::NoData),
            (ErrorKind::Bus, I2cError::BusError),
            (ErrorKind::Other, I2cError::BusError),
        ];

        for (kind, expected) in cases {
            let mut bus = FakeBus::new();
            bus.fail = Some(kind);
            let mut i2c = HalI2c::new(bus);
            assert_eq!(
                i2c.read_register(0x69, 0x00),
                Err(PlatformError::I2c(expected))
            );
        }
    }

    #[test]
    fn test_ten_bit_style_address_rejected() {
        let mut i2c = HalI2c::new(FakeBus::new());
        assert_eq!(
            i2c.write(0x80, &[0x00]),
            Err(PlatformError::I2c(I2cError::InvalidAddress))
        );
        assert_eq!(i2c.release().last_address, None);
    }
}
