//! Mock ADC implementation for testing

use crate::platform::{
    Result,
    error::{AdcError, PlatformError},
    traits::AdcInterface,
};
use alloc::vec::Vec;

/// Number of channels the mock converter exposes
pub const MOCK_ADC_CHANNELS: usize = 32;

/// Recorded conversion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcRead {
    /// Channel that was converted
    pub channel: u8,
}

/// Mock ADC implementation
///
/// Each channel holds a sticky value set by the test. Channels that were
/// never set report `AdcError::InvalidChannel`. All reads are recorded.
#[derive(Debug)]
pub struct MockAdc {
    values: [Option<u16>; MOCK_ADC_CHANNELS],
    reads: Vec<AdcRead>,
    fail_conversions: bool,
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdc {
    /// Create a mock ADC with no wired channels
    pub fn new() -> Self {
        Self {
            values: [None; MOCK_ADC_CHANNELS],
            reads: Vec::new(),
            fail_conversions: false,
        }
    }

    /// Set the count returned for `channel`
    pub fn set_channel(&mut self, channel: u8, value: u16) {
        if let Some(slot) = self.values.get_mut(channel as usize) {
            *slot = Some(value);
        }
    }

    /// Set three channels at once (X, Y, Z order)
    pub fn set_channels(&mut self, channels: [u8; 3], values: [u16; 3]) {
        for (channel, value) in channels.into_iter().zip(values) {
            self.set_channel(channel, value);
        }
    }

    /// Get read log (for test verification)
    pub fn reads(&self) -> Vec<AdcRead> {
        self.reads.clone()
    }

    /// Clear read log
    pub fn clear_reads(&mut self) {
        self.reads.clear();
    }

    /// Make every conversion fail
    pub fn set_fail_conversions(&mut self, fail: bool) {
        self.fail_conversions = fail;
    }
}

impl AdcInterface for MockAdc {
    fn read_channel(&mut self, channel: u8) -> Result<u16> {
        self.reads.push(AdcRead { channel });
        if self.fail_conversions {
            return Err(PlatformError::Adc(AdcError::ConversionFailed));
        }
        self.values
            .get(channel as usize)
            .copied()
            .flatten()
            .ok_or(PlatformError::Adc(AdcError::InvalidChannel))
    }
}
