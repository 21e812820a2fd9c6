//! Raw-count to physical-unit conversions
//!
//! Pure linear transforms used by the drivers. The arithmetic order follows
//! the sensor datasheets so results stay bit-identical to the closed forms.

/// ADC full-scale count for a converter of `bits` resolution (`2^bits - 1`)
///
/// A 10-bit converter gives `1023.0`.
pub fn adc_full_scale_for_bits(bits: u8) -> f64 {
    ((1u64 << bits.min(63)) - 1) as f64
}

/// Convert an averaged ADC count to g
///
/// ```text
/// g = (counts * reference_voltage / full_scale - zero_g_voltage) / sensitivity
/// ```
///
/// `sensitivity` is in volts per g (0.330 for 330 mV/g).
pub fn counts_to_g(
    counts: f64,
    reference_voltage: f64,
    full_scale: f64,
    zero_g_voltage: f64,
    sensitivity: f64,
) -> f64 {
    (counts * reference_voltage / full_scale - zero_g_voltage) / sensitivity
}

/// Convert an averaged gyro count to degrees per second
///
/// ```text
/// dps = (counts - zero) / scale_factor
/// ```
///
/// `scale_factor` is in LSB per °/s (14.375 for the ITG-3200).
pub fn counts_to_dps(counts: f64, zero: f64, scale_factor: f64) -> f64 {
    (counts - zero) / scale_factor
}

/// Assemble a signed 16-bit sample from its register bytes
///
/// The high byte lands in bits 15..8, the low byte in bits 7..0.
pub fn combine_bytes(high: u8, low: u8) -> i16 {
    (((high as u16) << 8) | low as u16) as i16
}
