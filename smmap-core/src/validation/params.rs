//! Validation of raw construction parameters
//!
//! Callers that receive sizes and offsets as signed integers (bindings,
//! command lines) normalize them here before any mapping is attempted.

use crate::{Result, SmmapError};

/// Validate a raw element count
pub const fn validate_size(raw: i64) -> Result<usize> {
    if raw < 0 || raw as u64 > usize::MAX as u64 {
        return Err(SmmapError::InvalidSize);
    }
    Ok(raw as usize)
}

/// Validate a raw byte offset into the backing file
pub const fn validate_offset(raw: i64) -> Result<u64> {
    if raw < 0 {
        return Err(SmmapError::InvalidOffset);
    }
    Ok(raw as u64)
}
