//! ITG-3200 Configuration

use super::registers::{self, ITG3200_ADDR_ALT};
use crate::devices::traits::ConfigError;

/// Datasheet sensitivity at ±2000 °/s (LSB per °/s)
pub const DEFAULT_SCALE_FACTOR: f64 = 14.375;

/// Default sample rate divider (1 kHz / (9 + 1) = 100 Hz)
pub const DEFAULT_SAMPLE_RATE_DIV: u8 = 9;

/// Digital low pass filter bandwidth (DLPF_CFG field of DLPF_FS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfBandwidth {
    /// 256 Hz, 8 kHz internal rate
    Hz256,
    /// 188 Hz
    Hz188,
    /// 98 Hz
    Hz98,
    /// 42 Hz
    Hz42,
    /// 20 Hz
    Hz20,
    /// 10 Hz
    Hz10,
    /// 5 Hz
    Hz5,
}

impl DlpfBandwidth {
    /// DLPF_CFG register value
    pub fn register_value(self) -> u8 {
        match self {
            DlpfBandwidth::Hz256 => 0,
            DlpfBandwidth::Hz188 => 1,
            DlpfBandwidth::Hz98 => 2,
            DlpfBandwidth::Hz42 => 3,
            DlpfBandwidth::Hz20 => 4,
            DlpfBandwidth::Hz10 => 5,
            DlpfBandwidth::Hz5 => 6,
        }
    }

    /// Internal sample rate (Hz) before the divider
    pub fn internal_rate_hz(self) -> u32 {
        match self {
            DlpfBandwidth::Hz256 => 8_000,
            _ => 1_000,
        }
    }
}

/// ITG-3200 driver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroscopeConfig {
    /// 7-bit bus address
    pub address: u8,

    /// Raw counts per °/s
    pub scale_factor: f64,

    /// Low pass filter setting
    pub dlpf: DlpfBandwidth,

    /// Sample rate divider
    pub sample_rate_div: u8,
}

impl Default for GyroscopeConfig {
    fn default() -> Self {
        Self {
            address: ITG3200_ADDR_ALT,
            scale_factor: DEFAULT_SCALE_FACTOR,
            dlpf: DlpfBandwidth::Hz188,
            sample_rate_div: DEFAULT_SAMPLE_RATE_DIV,
        }
    }
}

impl GyroscopeConfig {
    /// Output data rate (Hz)
    pub fn sample_rate_hz(&self) -> f32 {
        self.dlpf.internal_rate_hz() as f32 / (self.sample_rate_div as f32 + 1.0)
    }

    /// Value written to DLPF_FS
    ///
    /// FS_SEL is always 3; other settings are reserved on this part.
    pub fn dlpf_fs_value(&self) -> u8 {
        registers::FS_SEL_FULL_SCALE | (self.dlpf.register_value() & registers::DLPF_CFG_MASK)
    }

    /// Reject a zero scale factor or an out-of-range address
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor == 0.0 {
            return Err(ConfigError::ScaleFactor);
        }
        if self.address > 0x7F {
            return Err(ConfigError::BusAddress);
        }
        Ok(())
    }
}
