//! Platform error types
//!
//! This module defines error types for collaborator operations (ADC, I2C).

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All collaborator implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// I2C operation failed
    I2c(I2cError),
    /// ADC conversion failed
    Adc(AdcError),
}

/// I2C-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus error occurred
    BusError,
    /// No acknowledgment received
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Device returned fewer bytes than requested
    NoData,
    /// Invalid address
    InvalidAddress,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel is not wired to the converter
    InvalidChannel,
    /// Conversion did not complete
    ConversionFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::I2c(e) => write!(f, "I2C error: {}", e),
            PlatformError::Adc(e) => write!(f, "ADC error: {}", e),
        }
    }
}

impl fmt::Display for I2cError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I2cError::BusError => write!(f, "bus error"),
            I2cError::Nack => write!(f, "no acknowledge"),
            I2cError::ArbitrationLost => write!(f, "arbitration lost"),
            I2cError::NoData => write!(f, "no data available"),
            I2cError::InvalidAddress => write!(f, "invalid address"),
        }
    }
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::InvalidChannel => write!(f, "invalid channel"),
            AdcError::ConversionFailed => write!(f, "conversion failed"),
        }
    }
}

impl From<I2cError> for PlatformError {
    fn from(e: I2cError) -> Self {
        PlatformError::I2c(e)
    }
}

impl From<AdcError> for PlatformError {
    fn from(e: AdcError) -> Self {
        PlatformError::Adc(e)
    }
}
