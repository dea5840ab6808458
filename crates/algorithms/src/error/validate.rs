//! Validation utilities for engine inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NoValid { context });
    }
    Ok(())
}

/// Validate an exact buffer length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        tracing::trace!(context, actual, expected, "buffer length mismatch");
        return Err(Error::NoBuffer {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum buffer length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::NoBuffer {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum buffer length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::NoBuffer {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a value fits the configured capacity
#[inline(always)]
pub fn capacity(context: &'static str, digits: usize, max: usize) -> Result<()> {
    if digits > max {
        return Err(Error::NoMemory { context });
    }
    Ok(())
}
