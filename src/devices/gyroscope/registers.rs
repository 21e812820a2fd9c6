//! ITG-3200 Register Definitions
//!
//! Based on the ITG-3200 Product Specification (PS-ITG-3200A-00 rev 1.4).

#![allow(dead_code)]

// ============================================================================
// I2C Address
// ============================================================================

/// ITG-3200 I2C address when AD0 is low
pub const ITG3200_ADDR: u8 = 0x68;

/// ITG-3200 I2C address when AD0 is high (SparkFun breakout default)
pub const ITG3200_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Device identity, bits 6:1 hold the address
pub const WHO_AM_I: u8 = 0x00;

/// Sample rate divider: F_sample = F_internal / (SMPLRT_DIV + 1)
pub const SMPLRT_DIV: u8 = 0x15;

/// Digital low pass filter and full scale
pub const DLPF_FS: u8 = 0x16;

/// Interrupt configuration
pub const INT_CFG: u8 = 0x17;

/// Interrupt status
pub const INT_STATUS: u8 = 0x1A;

/// Temperature output
pub const TEMP_OUT_H: u8 = 0x1B;
pub const TEMP_OUT_L: u8 = 0x1C;

/// Gyroscope output, big-endian two's complement
pub const GYRO_XOUT_H: u8 = 0x1D;
pub const GYRO_XOUT_L: u8 = 0x1E;
pub const GYRO_YOUT_H: u8 = 0x1F;
pub const GYRO_YOUT_L: u8 = 0x20;
pub const GYRO_ZOUT_H: u8 = 0x21;
pub const GYRO_ZOUT_L: u8 = 0x22;

/// Power management
pub const PWR_MGM: u8 = 0x3E;

// ============================================================================
// DLPF_FS bits
// ============================================================================

pub const DLPF_CFG_0: u8 = 1 << 0;
pub const DLPF_CFG_1: u8 = 1 << 1;
pub const DLPF_CFG_2: u8 = 1 << 2;
pub const FS_SEL_0: u8 = 1 << 3;
pub const FS_SEL_1: u8 = 1 << 4;

/// FS_SEL value the part requires for normal operation (±2000 °/s)
pub const FS_SEL_FULL_SCALE: u8 = FS_SEL_0 | FS_SEL_1;

/// Mask of the DLPF_CFG field
pub const DLPF_CFG_MASK: u8 = DLPF_CFG_0 | DLPF_CFG_1 | DLPF_CFG_2;

// ============================================================================
// Identity
// ============================================================================

/// Value of WHO_AM_I bits 6:1 on a genuine ITG-3200
pub const WHO_AM_I_ID: u8 = 0x34;

/// Check a WHO_AM_I reading
///
/// Bit 0 reflects the AD0 strap and bit 7 is unused, so only bits 6:1 are
/// compared.
pub fn is_itg3200(who_am_i: u8) -> bool {
    (who_am_i >> 1) & 0x3F == WHO_AM_I_ID
}

/// Gyro output register pairs in X, Y, Z order
pub const GYRO_OUT: [(u8, u8); 3] = [
    (GYRO_XOUT_H, GYRO_XOUT_L),
    (GYRO_YOUT_H, GYRO_YOUT_L),
    (GYRO_ZOUT_H, GYRO_ZOUT_L),
];
