//! Write-permission gate consulted before every mutation

use crate::{AccessMode, Result, SmmapError};

/// Anything whose writes are governed by an [`AccessMode`]
///
/// Mutating operations call [`AccessControl::check_writable`] before touching
/// memory. Reads never consult it.
pub trait AccessControl {
    /// Access mode the object was opened with
    fn access_mode(&self) -> AccessMode;

    /// Whether mutating operations are permitted
    fn is_writable(&self) -> bool {
        self.access_mode().is_writable()
    }

    /// Fail with [`SmmapError::ReadOnlyViolation`] unless writable
    fn check_writable(&self) -> Result<()> {
        if self.is_writable() {
            Ok(())
        } else {
            Err(SmmapError::ReadOnlyViolation)
        }
    }
}

impl AccessControl for AccessMode {
    fn access_mode(&self) -> AccessMode {
        *self
    }
}
