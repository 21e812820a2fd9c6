//! ITG-3200 Driver Implementation

use motion_sense_core::{
    AxisTriple,
    conversion::{combine_bytes, counts_to_dps},
};

use super::config::GyroscopeConfig;
use super::registers::{DLPF_FS, GYRO_OUT, SMPLRT_DIV, WHO_AM_I};
use crate::devices::traits::{Sensor, SensorError};
use crate::platform::traits::I2cInterface;

/// Sensor name
pub const NAME: &str = "Gyro";

/// Print label
pub const LABEL: &str = "GYR";

/// ITG-3200 triple-axis gyroscope
///
/// Raw rates are read one register at a time, smoothed, and converted to °/s
/// relative to the zero baseline captured by [`Sensor::set_zero`]. Until a
/// baseline is captured it is 0.
///
/// # Type Parameters
///
/// * `I` - Any type implementing `I2cInterface`
///
/// # Example
///
/// ```ignore
/// let mut gyro = Gyroscope::new(i2c, GyroscopeConfig::default())?;
/// gyro.configure();
/// calibrate_at_rest_default(&mut gyro);
/// gyro.calculate();
/// ```
pub struct Gyroscope<I: I2cInterface> {
    /// I2C collaborator
    i2c: I,

    /// Driver configuration
    config: GyroscopeConfig,

    /// Smoothing state
    axes: AxisTriple,
}

impl<I: I2cInterface> Gyroscope<I> {
    /// Create a driver around an I2C handle
    ///
    /// Nothing is written to the device; call [`configure`](Self::configure)
    /// once the bus is up.
    ///
    /// # Errors
    ///
    /// `SensorError::InvalidConfig` if [`GyroscopeConfig::validate`] fails.
    pub fn new(i2c: I, config: GyroscopeConfig) -> Result<Self, SensorError> {
        config.validate()?;
        crate::log_debug!("{} at {:#x}", NAME, config.address);
        Ok(Self {
            i2c,
            config,
            axes: AxisTriple::new(),
        })
    }

    /// Program full scale, low pass filter and sample rate
    ///
    /// Writes DLPF_FS, then SMPLRT_DIV. Nothing is read back; a failed
    /// write is logged and the remaining write still goes out.
    pub fn configure(&mut self) {
        let dlpf_fs = self.config.dlpf_fs_value();
        self.write_logged(DLPF_FS, dlpf_fs);
        self.write_logged(SMPLRT_DIV, self.config.sample_rate_div);
    }

    /// Read the WHO_AM_I register
    ///
    /// Use [`is_itg3200`](super::registers::is_itg3200) to check the result.
    ///
    /// # Errors
    ///
    /// `SensorError::Bus` if the register read fails.
    pub fn who_am_i(&mut self) -> Result<u8, SensorError> {
        let id = self.i2c.read_register(self.config.address, WHO_AM_I)?;
        crate::log_debug!("{} WHO_AM_I = {:#x}", NAME, id);
        Ok(id)
    }

    /// Read a big-endian signed 16-bit value from two registers
    ///
    /// High byte first, then low byte, as two separate reads. A byte that
    /// fails to read counts as 0.
    pub fn read_raw(&mut self, high: u8, low: u8) -> i16 {
        let high_byte = self.read_byte(high);
        let low_byte = self.read_byte(low);
        combine_bytes(high_byte, low_byte)
    }

    /// Driver configuration
    pub fn config(&self) -> &GyroscopeConfig {
        &self.config
    }

    /// Borrow the I2C handle
    pub fn i2c_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Give the I2C handle back
    pub fn release(self) -> I {
        self.i2c
    }

    fn read_byte(&mut self, reg: u8) -> u8 {
        match self.i2c.read_register(self.config.address, reg) {
            Ok(byte) => byte,
            Err(e) => {
                crate::log_warn!("{} register {:#x} read failed: {}", NAME, reg, e);
                0
            }
        }
    }

    fn write_logged(&mut self, reg: u8, value: u8) {
        match self.i2c.write_register(self.config.address, reg, value) {
            Ok(()) => crate::log_debug!("{} wrote {:#x} to {:#x}", NAME, value, reg),
            Err(e) => crate::log_warn!("{} write to {:#x} failed: {}", NAME, reg, e),
        }
    }
}

impl<I: I2cInterface> Sensor for Gyroscope<I> {
    fn name(&self) -> &str {
        NAME
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn axes(&self) -> &AxisTriple {
        &self.axes
    }

    fn axes_mut(&mut self) -> &mut AxisTriple {
        &mut self.axes
    }

    fn read_pins(&mut self) {
        let [(xh, xl), (yh, yl), (zh, zl)] = GYRO_OUT;
        let x = self.read_raw(xh, xl);
        let y = self.read_raw(yh, yl);
        let z = self.read_raw(zh, zl);
        crate::log_trace!("{} raw: {} {} {}", NAME, x, y, z);
        self.axes.push(x as f64, y as f64, z as f64);
    }

    fn calculate(&mut self) {
        self.read_pins();
        let scale_factor = self.config.scale_factor;
        self.axes
            .convert_with(|average, zero| counts_to_dps(average, zero, scale_factor));
    }
}
