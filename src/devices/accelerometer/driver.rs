//! Analog Accelerometer Driver Implementation
//!
//! Reads three ADC channels, smooths them and converts the averages to g.

use motion_sense_core::{AxisTriple, conversion::counts_to_g};
use nalgebra::Vector3;

use super::config::AccelerometerConfig;
use crate::devices::traits::{Sensor, SensorError};
use crate::platform::traits::AdcInterface;

/// Triple-axis analog accelerometer
///
/// Implements [`Sensor`]. No zero-offset step is applied: the datasheet
/// zero-g voltage stands in for runtime calibration.
pub struct Accelerometer<A: AdcInterface> {
    /// ADC collaborator
    adc: A,

    /// Driver configuration
    config: AccelerometerConfig,

    /// Smoothing state
    axes: AxisTriple,
}

impl<A: AdcInterface> Accelerometer<A> {
    /// Create a driver around an ADC handle
    ///
    /// # Errors
    ///
    /// `SensorError::InvalidConfig` if the constants fail
    /// [`AccelerometerConfig::validate`].
    pub fn new(adc: A, config: AccelerometerConfig) -> Result<Self, SensorError> {
        config.validate()?;
        crate::log_debug!(
            "{} on channels x={} y={} z={}",
            config.name,
            config.x_channel,
            config.y_channel,
            config.z_channel
        );
        Ok(Self {
            adc,
            config,
            axes: AxisTriple::new(),
        })
    }

    /// Driver configuration
    pub fn config(&self) -> &AccelerometerConfig {
        &self.config
    }

    /// Borrow the ADC handle
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Give the ADC handle back
    pub fn release(self) -> A {
        self.adc
    }

    /// Read one channel; a failed conversion counts as 0
    fn read_channel(&mut self, channel: u8) -> u16 {
        match self.adc.read_channel(channel) {
            Ok(count) => count,
            Err(e) => {
                crate::log_warn!("{} channel {} read failed: {}", self.config.name, channel, e);
                0
            }
        }
    }

    /// Convert one averaged count to g
    fn to_g(&self, counts: f64) -> f64 {
        counts_to_g(
            counts,
            self.config.reference_voltage,
            self.config.adc_full_scale,
            self.config.zero_g_voltage,
            self.config.sensitivity,
        )
    }
}

impl<A: AdcInterface> Sensor for Accelerometer<A> {
    fn name(&self) -> &str {
        self.config.name
    }

    fn axes(&self) -> &AxisTriple {
        &self.axes
    }

    fn axes_mut(&mut self) -> &mut AxisTriple {
        &mut self.axes
    }

    fn read_pins(&mut self) {
        let x = self.read_channel(self.config.x_channel);
        let y = self.read_channel(self.config.y_channel);
        let z = self.read_channel(self.config.z_channel);
        crate::log_trace!("{} raw: {} {} {}", self.config.name, x, y, z);
        self.axes.push(x as f64, y as f64, z as f64);
    }

    fn calculate(&mut self) {
        self.read_pins();
        let averages = self.axes.averages();
        let g = Vector3::new(
            self.to_g(averages.x),
            self.to_g(averages.y),
            self.to_g(averages.z),
        );
        self.axes.set_calculated(g);
    }
}
