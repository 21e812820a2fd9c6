//! At-rest zero calibration

use motion_sense_core::WINDOW;
use nalgebra::Vector3;

use crate::devices::traits::Sensor;

/// Sample a stationary sensor `cycles` times, then capture the zero baseline
///
/// Fewer than [`WINDOW`] cycles leaves part of the warm-up zeros in the
/// average, which then ends up in the baseline.
///
/// Returns the captured baseline.
pub fn calibrate_at_rest<S: Sensor + ?Sized>(sensor: &mut S, cycles: usize) -> Vector3<f64> {
    if cycles < WINDOW {
        crate::log_warn!(
            "{} calibrating with {} of {} samples",
            sensor.name(),
            cycles,
            WINDOW
        );
    }
    for _ in 0..cycles {
        sensor.read_pins();
    }
    sensor.set_zero();
    sensor.zero()
}

/// [`calibrate_at_rest`] over one full smoothing window
pub fn calibrate_at_rest_default<S: Sensor + ?Sized>(sensor: &mut S) -> Vector3<f64> {
    calibrate_at_rest(sensor, WINDOW)
}
