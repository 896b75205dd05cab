//! Mapping options

use smmap_core::{validation::validate_offset, AccessMode, Result};

/// How a region should be mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapOptions {
    /// Requested access; [`AccessMode::Default`] maps read-write
    pub access: AccessMode,
    /// Byte offset into the backing file where the mapping begins
    pub offset: u64,
    /// Pre-fault the mapped pages
    pub populate: bool,
}

impl MapOptions {
    /// Read-only mapping at offset zero
    pub fn read_only() -> Self {
        Self::default().with_access(AccessMode::ReadOnly)
    }

    /// Read-write mapping at offset zero
    pub fn read_write() -> Self {
        Self::default().with_access(AccessMode::ReadWrite)
    }

    /// Build options from unvalidated raw values
    ///
    /// The offset is checked before the access mode.
    pub fn from_raw(access: i32, offset: i64) -> Result<Self> {
        let offset = validate_offset(offset)?;
        let access = AccessMode::try_from(access)?;
        Ok(Self {
            access,
            offset,
            populate: false,
        })
    }

    /// Set the access mode
    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Set the byte offset into the file
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Request that pages be pre-faulted when mapping
    pub fn with_populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }
}
