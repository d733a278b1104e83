//! Validation utilities for mode construction and per-block contracts

use super::{Error, Result};

/// Validate a key length against the primitive's accepted size
#[inline(always)]
pub fn key_length(cipher: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::KeyLength {
            cipher,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length against the block size
#[inline(always)]
pub fn iv_length(mode: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::IvLength {
            mode,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an initial counter length against the block size
#[inline(always)]
pub fn counter_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::CounterLength { expected, actual });
    }
    Ok(())
}

/// Validate a single-block buffer length
#[inline(always)]
pub fn block_length(cipher: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::BlockLength {
            cipher,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum amount of available data
#[inline(always)]
pub fn min_data(mode: &'static str, actual: usize, needed: usize) -> Result<()> {
    if actual < needed {
        return Err(Error::InsufficientData {
            mode,
            needed,
            actual,
        });
    }
    Ok(())
}

/// Reject a parameter the mode does not accept
#[inline(always)]
pub fn no_parameter(
    absent: bool,
    mode: &'static str,
    parameter: &'static str,
) -> Result<()> {
    if !absent {
        return Err(Error::UnsupportedParameter { mode, parameter });
    }
    Ok(())
}
