//! Ownership of a single shared memory mapping
//!
//! A [`MappedRegion`] is created once, mapped once and unmapped exactly once,
//! either by [`MappedRegion::close`] or when it is dropped. Once closed every
//! accessor reports [`SmmapError::ClosedMapping`] instead of touching memory.

use std::os::fd::RawFd;

use memmap2::{Mmap, MmapMut, MmapOptions};
use smmap_core::{
    validation::{checked_byte_len, validate_size},
    AccessControl, AccessMode, Protection, SmmapError,
};
use tracing::{debug, trace, warn};

use crate::{config::MapOptions, Error, Result};

/// The live mapping, typed by the protection it was created with
enum Mapping {
    ReadOnly(Mmap),
    ReadWrite(MmapMut),
}

impl Mapping {
    fn as_slice(&self) -> &[u8] {
        match self {
            Mapping::ReadOnly(mmap) => &mmap[..],
            Mapping::ReadWrite(mmap) => &mmap[..],
        }
    }
}

/// A shared mapping of `[offset, offset + byte_len)` of a file descriptor
pub struct MappedRegion {
    /// `None` once the region has been unmapped
    mapping: Option<Mapping>,
    byte_len: usize,
    offset: u64,
    access: AccessMode,
}

impl MappedRegion {
    /// Map `element_count * element_size` bytes of `fd`
    ///
    /// The mapping is always shared with the backing file. OS failures are
    /// returned as [`Error::MapFailed`] and leave nothing allocated.
    pub fn open(
        fd: RawFd,
        element_count: usize,
        element_size: usize,
        options: &MapOptions,
    ) -> Result<Self> {
        let byte_len = checked_byte_len(element_count, element_size)?;

        let mut mmap_options = MmapOptions::new();
        mmap_options.offset(options.offset).len(byte_len);
        if options.populate {
            mmap_options.populate();
        }

        // SAFETY:
        // 1. The descriptor is only borrowed for the duration of the call;
        //    the kernel keeps its own reference to the file
        // 2. Offset and length were validated and the length fits in isize
        // 3. Mutation of the shared file by other mappers is allowed by the
        //    contract of this type and never observed through a Rust
        //    reference held across such a write
        let mapped = match options.access.protection() {
            Protection::Read => unsafe { mmap_options.map(fd) }.map(Mapping::ReadOnly),
            Protection::ReadWrite => {
                unsafe { mmap_options.map_mut(fd) }.map(Mapping::ReadWrite)
            }
        };

        let mapping = mapped.map_err(|err| {
            warn!(
                "mmap of fd {} failed ({} bytes at offset {}, {}): {}",
                fd, byte_len, options.offset, options.access, err
            );
            Error::MapFailed(err)
        })?;

        debug!(
            "Mapped fd {}: {} bytes at offset {} ({})",
            fd, byte_len, options.offset, options.access
        );

        Ok(Self {
            mapping: Some(mapping),
            byte_len,
            offset: options.offset,
            access: options.access,
        })
    }

    /// Map from unnormalized primitives
    ///
    /// Validates the element count, then the offset, then the access mode,
    /// before any mapping is attempted.
    pub fn open_raw(
        fd: RawFd,
        element_count: i64,
        element_size: usize,
        access: i32,
        offset: i64,
    ) -> Result<Self> {
        let element_count = validate_size(element_count)?;
        let options = MapOptions::from_raw(access, offset)?;
        Self::open(fd, element_count, element_size, &options)
    }

    /// Unmap the region; further calls are no-ops
    pub fn close(&mut self) {
        match self.mapping.take() {
            Some(mapping) => {
                drop(mapping);
                debug!(
                    "Unmapped {} bytes at offset {}",
                    self.byte_len, self.offset
                );
            }
            None => trace!("close on an already unmapped region"),
        }
    }

    pub fn is_open(&self) -> bool {
        self.mapping.is_some()
    }

    /// Total mapped bytes
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Byte offset into the backing file
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The mapped bytes
    pub fn bytes(&self) -> Result<&[u8]> {
        match &self.mapping {
            Some(mapping) => Ok(mapping.as_slice()),
            None => Err(SmmapError::ClosedMapping.into()),
        }
    }

    /// The mapped bytes, for writing
    ///
    /// Fails with [`SmmapError::ClosedMapping`] first, then with
    /// [`SmmapError::ReadOnlyViolation`] for read-only regions.
    pub fn bytes_mut(&mut self) -> Result<&mut [u8]> {
        match &mut self.mapping {
            None => Err(SmmapError::ClosedMapping.into()),
            Some(Mapping::ReadOnly(_)) => Err(SmmapError::ReadOnlyViolation.into()),
            Some(Mapping::ReadWrite(mmap)) => Ok(&mut mmap[..]),
        }
    }
}

impl AccessControl for MappedRegion {
    fn access_mode(&self) -> AccessMode {
        self.access
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        if self.is_open() {
            self.close();
        }
    }
}

impl std::fmt::Debug for MappedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedRegion")
            .field("open", &self.is_open())
            .field("byte_len", &self.byte_len)
            .field("offset", &self.offset)
            .field("access", &self.access)
            .finish()
    }
}
