//! Three-axis smoothing state shared by every sensor
//!
//! Holds one [`SmoothingBuffer`] per axis, the zero baseline captured by
//! [`AxisTriple::set_zero`], and the last physical-unit output written by the
//! owning driver.

use nalgebra::Vector3;

use crate::smoothing::{SmoothingBuffer, WINDOW};

/// Per-axis smoothing, zero baseline and calculated output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTriple {
    x: SmoothingBuffer<WINDOW>,
    y: SmoothingBuffer<WINDOW>,
    z: SmoothingBuffer<WINDOW>,
    zero: Vector3<f64>,
    calculated: Vector3<f64>,
}

impl Default for AxisTriple {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisTriple {
    /// Create zeroed buffers with a zero baseline
    pub fn new() -> Self {
        Self {
            x: SmoothingBuffer::new(),
            y: SmoothingBuffer::new(),
            z: SmoothingBuffer::new(),
            zero: Vector3::zeros(),
            calculated: Vector3::zeros(),
        }
    }

    /// Push one raw sample per axis and return the updated averages
    pub fn push(&mut self, raw_x: f64, raw_y: f64, raw_z: f64) -> Vector3<f64> {
        Vector3::new(self.x.push(raw_x), self.y.push(raw_y), self.z.push(raw_z))
    }

    /// Current per-axis moving averages
    pub fn averages(&self) -> Vector3<f64> {
        Vector3::new(self.x.average(), self.y.average(), self.z.average())
    }

    /// Capture the current averages as the zero baseline
    ///
    /// Call while the sensor is stationary. Replaces any earlier baseline.
    pub fn set_zero(&mut self) -> Vector3<f64> {
        self.zero = self.averages();
        self.zero
    }

    /// Zero baseline (all zeros until [`set_zero`](Self::set_zero) runs)
    pub fn zero(&self) -> Vector3<f64> {
        self.zero
    }

    /// Last physical-unit output stored by the driver
    pub fn calculated(&self) -> Vector3<f64> {
        self.calculated
    }

    /// Store a new physical-unit output
    pub fn set_calculated(&mut self, calculated: Vector3<f64>) {
        self.calculated = calculated;
    }

    /// Apply `convert` to each average and store the result as the output
    ///
    /// `convert` receives `(average, zero)` for one axis.
    pub fn convert_with<F>(&mut self, mut convert: F) -> Vector3<f64>
    where
        F: FnMut(f64, f64) -> f64,
    {
        let averages = self.averages();
        self.calculated = Vector3::new(
            convert(averages.x, self.zero.x),
            convert(averages.y, self.zero.y),
            convert(averages.z, self.zero.z),
        );
        self.calculated
    }

    /// Read access to the X axis buffer
    pub fn x(&self) -> &SmoothingBuffer<WINDOW> {
        &self.x
    }

    /// Read access to the Y axis buffer
    pub fn y(&self) -> &SmoothingBuffer<WINDOW> {
        &self.y
    }

    /// Read access to the Z axis buffer
    pub fn z(&self) -> &SmoothingBuffer<WINDOW> {
        &self.z
    }
}
