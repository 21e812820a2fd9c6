//! Reading output
//!
//! Prints a sensor's values as one tab-separated record:
//!
//! ```text
//! GYR =\t0.12\t-3.40\t1.00
//! ```
//!
//! Two decimals per value and no trailing newline, so a caller can append
//! further sensors to the same line.

use core::fmt::{self, Write};

use heapless::String;
use nalgebra::Vector3;

use crate::devices::traits::Sensor;

/// Capacity of a formatted record
pub const REPORT_CAPACITY: usize = 64;

/// Formatted record
pub type Report = String<REPORT_CAPACITY>;

/// Write `"<label> =\t<x>\t<y>\t<z>"` to `out`
pub fn write_readings<W: Write>(out: &mut W, label: &str, values: Vector3<f64>) -> fmt::Result {
    write!(
        out,
        "{} =\t{:.2}\t{:.2}\t{:.2}",
        label, values.x, values.y, values.z
    )
}

/// Write the smoothed raw averages of `sensor`
pub fn write_raw<W: Write, S: Sensor + ?Sized>(out: &mut W, sensor: &S) -> fmt::Result {
    write_readings(out, sensor.label(), sensor.averages())
}

/// Write the last physical-unit output of `sensor`
pub fn write_calculated<W: Write, S: Sensor + ?Sized>(out: &mut W, sensor: &S) -> fmt::Result {
    write_readings(out, sensor.label(), sensor.calculated())
}

/// Format the smoothed raw averages into a fixed buffer
///
/// Output that does not fit in [`REPORT_CAPACITY`] bytes is truncated.
pub fn format_raw<S: Sensor + ?Sized>(sensor: &S) -> Report {
    let mut buf = Report::new();
    let _ = write_raw(&mut buf, sensor);
    buf
}

/// Format the last physical-unit output into a fixed buffer
///
/// Output that does not fit in [`REPORT_CAPACITY`] bytes is truncated.
pub fn format_calculated<S: Sensor + ?Sized>(sensor: &S) -> Report {
    let mut buf = Report::new();
    let _ = write_calculated(&mut buf, sensor);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::accelerometer::{Accelerometer, AccelerometerConfig};
    use crate::devices::gyroscope::{Gyroscope, GyroscopeConfig, registers};
    use crate::platform::mock::{MockAdc, MockI2c};
    use motion_sense_core::WINDOW;

    #[test]
    fn test_write_readings_format() {
        let mut out = std::string::String::new();
        write_readings(&mut out, "ACC", Vector3::new(0.0, -1.0, 1.2345)).unwrap();
        assert_eq!(out, "ACC =\t0.00\t-1.00\t1.23");
    }

    #[test]
    fn test_records_concatenate_without_newline() {
        let mut out = std::string::String::new();
        write_readings(&mut out, "ACC", Vector3::zeros()).unwrap();
        write_readings(&mut out, "GYR", Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(out, "ACC =\t0.00\t0.00\t0.00GYR =\t1.00\t2.00\t3.00");
    }

    #[test]
    fn test_format_raw_and_calculated_for_accelerometer() {
        let mut adc = MockAdc::new();
        adc.set_channels([0, 1, 2], [600, 600, 600]);
        let mut acc = Accelerometer::new(adc, AccelerometerConfig::default()).unwrap();
        for _ in 0..WINDOW {
            acc.calculate();
        }

        assert_eq!(format_raw(&acc).as_str(), "ACC =\t600.00\t600.00\t600.00");
        // (600 * 3.3 / 1023 - 1.65) / 0.33 = 0.8651...
        assert_eq!(format_calculated(&acc).as_str(), "ACC =\t0.87\t0.87\t0.87");
    }

    #[test]
    fn test_gyroscope_uses_short_label() {
        let mut i2c = MockI2c::new(0x69);
        i2c.set_register_pair(registers::GYRO_XOUT_H, 1150);
        let mut gyro = Gyroscope::new(i2c, GyroscopeConfig::default()).unwrap();
        for _ in 0..WINDOW {
            gyro.calculate();
        }

        assert_eq!(
            format_calculated(&gyro).as_str(),
            "GYR =\t80.00\t0.00\t0.00"
        );
    }

    #[test]
    fn test_format_truncates_long_records() {
        let mut out = Report::new();
        let long_label = "A-very-long-sensor-label-that-eats-most-of-the-buffer";
        let result = write_readings(&mut out, long_label, Vector3::new(100.0, 200.0, 300.0));
        assert!(result.is_err());
        assert!(out.len() <= REPORT_CAPACITY);
    }
}
