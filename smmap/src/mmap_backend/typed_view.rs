//! Typed, fixed-stride element access over a mapped region
//!
//! A [`TypedView`] binds one [`FormatDescriptor`] to one [`MappedRegion`] and
//! exposes the region as a fixed-length sequence of [`Number`] values. Every
//! call checks, in order: that the region is still open, the index or range,
//! writability (for mutations), and finally the value itself.

use std::{fs::File, os::fd::AsRawFd, os::fd::RawFd, slice::ChunksExact};

use smmap_core::{
    validation::{
        check_index, clamp_range, element_window, range_window, validate_offset, validate_size,
    },
    AccessControl, AccessMode, Element, FixedSequence, FormatCode, FormatDescriptor, Number,
    SliceOperations, SmmapError,
};

use super::region::MappedRegion;
use crate::{config::MapOptions, Error, Result};

/// A fixed-length sequence of numeric elements backed by a shared mapping
pub struct TypedView {
    region: MappedRegion,
    descriptor: &'static FormatDescriptor,
    element_count: usize,
}

impl TypedView {
    /// Map `element_count` elements of `code` from `fd`
    pub fn open(
        fd: RawFd,
        element_count: usize,
        code: FormatCode,
        options: &MapOptions,
    ) -> Result<Self> {
        Self::open_descriptor(fd, element_count, code.descriptor(), options)
    }

    fn open_descriptor(
        fd: RawFd,
        element_count: usize,
        descriptor: &'static FormatDescriptor,
        options: &MapOptions,
    ) -> Result<Self> {
        let region = MappedRegion::open(fd, element_count, descriptor.size, options)?;
        Ok(Self {
            region,
            descriptor,
            element_count,
        })
    }

    /// Map from unnormalized primitives
    ///
    /// Checks the element count, the offset, the format code and the access
    /// mode in that order. Nothing is mapped unless all of them pass.
    pub fn open_raw(
        fd: RawFd,
        element_count: i64,
        format_code: char,
        access: i32,
        offset: i64,
    ) -> Result<Self> {
        let element_count = validate_size(element_count)?;
        validate_offset(offset)?;
        let descriptor = FormatDescriptor::resolve(format_code)?;
        let options = MapOptions::from_raw(access, offset)?;
        Self::open_descriptor(fd, element_count, descriptor, &options)
    }

    /// Map from an open file; the file may be closed afterwards
    pub fn open_file(
        file: &File,
        element_count: usize,
        code: FormatCode,
        options: &MapOptions,
    ) -> Result<Self> {
        Self::open(file.as_raw_fd(), element_count, code, options)
    }

    /// Release the mapping. Calling this again is a no-op.
    pub fn close(&mut self) {
        self.region.close();
    }

    pub fn is_closed(&self) -> bool {
        !self.region.is_open()
    }

    /// Number of elements
    pub fn len(&self) -> Result<usize> {
        self.region.bytes()?;
        Ok(self.element_count)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn format_code(&self) -> FormatCode {
        self.descriptor.code
    }

    pub fn descriptor(&self) -> &'static FormatDescriptor {
        self.descriptor
    }

    pub fn access_mode(&self) -> AccessMode {
        self.region.access_mode()
    }

    /// Byte offset of the first element in the backing file
    pub fn offset(&self) -> u64 {
        self.region.offset()
    }

    /// Mapped length in bytes; always `len * element size`
    pub fn byte_len(&self) -> usize {
        self.region.byte_len()
    }

    /// Read element `index`
    pub fn get_item(&self, index: isize) -> Result<Number> {
        let bytes = self.region.bytes()?;
        let index = check_index(index, self.element_count)?;
        let window = element_window(index, self.descriptor.size);
        Ok(self.descriptor.decode(&bytes[window]))
    }

    /// Overwrite element `index`
    ///
    /// A value the format cannot hold is rejected and the element keeps its
    /// previous contents.
    pub fn set_item(&mut self, index: isize, value: impl Into<Number>) -> Result<()> {
        self.region.bytes()?;
        let index = check_index(index, self.element_count)?;
        self.region.check_writable()?;

        let window = element_window(index, self.descriptor.size);
        let bytes = self.region.bytes_mut()?;
        self.descriptor.encode(value.into(), &mut bytes[window])?;
        Ok(())
    }

    /// Elements in `[low, high)` after clamping both bounds into `[0, len]`
    pub fn get_slice(&self, low: isize, high: isize) -> Result<Vec<Number>> {
        let bytes = self.region.bytes()?;
        let range = clamp_range(low, high, self.element_count);
        let size = self.descriptor.size;
        Ok(bytes[range_window(&range, size)]
            .chunks_exact(size)
            .map(|chunk| self.descriptor.decode(chunk))
            .collect())
    }

    /// Overwrite the clamped range `[low, high)` with `values`
    ///
    /// `values` must have exactly as many items as the clamped range. All
    /// values are encoded before any byte of the mapping changes, so a length,
    /// access or value error leaves the whole range as it was.
    pub fn set_slice<N>(&mut self, low: isize, high: isize, values: &[N]) -> Result<()>
    where
        N: Copy + Into<Number>,
    {
        self.region.bytes()?;
        let range = clamp_range(low, high, self.element_count);
        if values.len() != range.len() {
            return Err(SmmapError::WrongSliceLength {
                expected: range.len(),
                actual: values.len(),
            }
            .into());
        }
        self.region.check_writable()?;

        let size = self.descriptor.size;
        let mut staged = vec![0u8; range.len() * size];
        for (value, window) in values.iter().zip(staged.chunks_exact_mut(size)) {
            self.descriptor.encode((*value).into(), window)?;
        }

        let bytes = self.region.bytes_mut()?;
        bytes[range_window(&range, size)].copy_from_slice(&staged);
        Ok(())
    }

    /// Iterate over every element in index order
    pub fn iter(&self) -> Result<Elements<'_>> {
        let bytes = self.region.bytes()?;
        Ok(Elements {
            chunks: bytes.chunks_exact(self.descriptor.size),
            descriptor: self.descriptor,
        })
    }

    /// The mapped memory as raw bytes
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.region.bytes()
    }

    /// The mapped memory as writable raw bytes
    pub fn as_bytes_mut(&mut self) -> Result<&mut [u8]> {
        self.region.bytes_mut()
    }

    /// Zero-copy slice of the elements as their native type
    ///
    /// `T` must be the type bound to this view's format, and the mapped
    /// address must be aligned for `T`. Offsets that are not a multiple of
    /// `T`'s alignment yield [`SmmapError::Misaligned`].
    pub fn as_typed<T: Element>(&self) -> Result<&[T]> {
        let bytes = self.region.bytes()?;
        if T::CODE != self.descriptor.code {
            return Err(SmmapError::TypeMismatch.into());
        }
        bytemuck::try_cast_slice(bytes).map_err(|_| SmmapError::Misaligned.into())
    }

    /// Mutable counterpart of [`TypedView::as_typed`]
    pub fn as_typed_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        let code = self.descriptor.code;
        let bytes = self.region.bytes_mut()?;
        if T::CODE != code {
            return Err(SmmapError::TypeMismatch.into());
        }
        bytemuck::try_cast_slice_mut(bytes).map_err(|_| SmmapError::Misaligned.into())
    }
}

impl FixedSequence for TypedView {
    type Error = Error;

    fn len(&self) -> Result<usize> {
        TypedView::len(self)
    }

    fn get_item(&self, index: isize) -> Result<Number> {
        TypedView::get_item(self, index)
    }

    fn set_item(&mut self, index: isize, value: Number) -> Result<()> {
        TypedView::set_item(self, index, value)
    }
}

impl SliceOperations for TypedView {
    fn get_slice(&self, low: isize, high: isize) -> Result<Vec<Number>> {
        TypedView::get_slice(self, low, high)
    }

    fn set_slice(&mut self, low: isize, high: isize, values: &[Number]) -> Result<()> {
        TypedView::set_slice(self, low, high, values)
    }
}

impl AccessControl for TypedView {
    fn access_mode(&self) -> AccessMode {
        self.region.access_mode()
    }
}

impl std::fmt::Debug for TypedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedView")
            .field("format", &self.descriptor.code)
            .field("element_count", &self.element_count)
            .field("region", &self.region)
            .finish()
    }
}

/// Iterator over the elements of a [`TypedView`]
pub struct Elements<'a> {
    chunks: ChunksExact<'a, u8>,
    descriptor: &'static FormatDescriptor,
}

impl Iterator for Elements<'_> {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        self.chunks.next().map(|chunk| self.descriptor.decode(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Number> {
        self.chunks
            .next_back()
            .map(|chunk| self.descriptor.decode(chunk))
    }
}

impl ExactSizeIterator for Elements<'_> {}
