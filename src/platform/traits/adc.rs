//! ADC interface trait
//!
//! This module defines the analog-to-digital converter interface that analog sensors consume.

use crate::platform::Result;

/// ADC interface trait
///
/// One blocking conversion per call. The returned count lies in
/// `0..=full_scale` for the converter's resolution; the caller knows the
/// resolution and reference voltage, the collaborator does not scale.
///
/// # Safety Invariants
///
/// - ADC peripheral must be initialized before use
/// - Channel numbers are collaborator-defined (pin or mux index)
pub trait AdcInterface {
    /// Convert one channel and return the raw count
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc` if the channel is not wired or the
    /// conversion fails.
    fn read_channel(&mut self, channel: u8) -> Result<u16>;
}

impl<T: AdcInterface + ?Sized> AdcInterface for &mut T {
    fn read_channel(&mut self, channel: u8) -> Result<u16> {
        (**self).read_channel(channel)
    }
}
