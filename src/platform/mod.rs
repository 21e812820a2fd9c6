//! Platform abstraction layer
//!
//! Drivers never touch hardware directly. The ADC and I2C collaborators are
//! injected through the traits in [`traits`]; [`hal`] adapts `embedded-hal`
//! buses and [`mock`] provides recording test doubles.

pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{AdcError, I2cError, PlatformError, Result};
pub use traits::{AdcInterface, I2cInterface};
