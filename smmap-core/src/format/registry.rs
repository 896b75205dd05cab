//! Fixed table of element format descriptors
//!
//! The table is a `static`, so it is initialized before first use and can
//! never be mutated or rebuilt.

use core::mem::size_of;

use crate::{Element, FormatCode, Number, Result, SmmapError};

/// Decode one element from a byte window of exactly `size` bytes
pub type DecodeFn = fn(&[u8]) -> Number;

/// Range-check a value and encode it into a byte window of exactly `size` bytes
pub type EncodeFn = fn(Number, &mut [u8]) -> Result<()>;

/// Descriptor for one element format
#[derive(Clone, Copy)]
pub struct FormatDescriptor {
    /// Type tag
    pub code: FormatCode,
    /// Width of one element in bytes
    pub size: usize,
    decode: DecodeFn,
    encode: EncodeFn,
}

fn decode_element<T: Element>(bytes: &[u8]) -> Number {
    bytemuck::pod_read_unaligned::<T>(&bytes[..size_of::<T>()]).to_number()
}

fn encode_element<T: Element>(value: Number, bytes: &mut [u8]) -> Result<()> {
    let element = T::from_number(value)?;
    bytes[..size_of::<T>()].copy_from_slice(bytemuck::bytes_of(&element));
    Ok(())
}

impl FormatDescriptor {
    /// Build the descriptor for a native element type
    pub const fn of<T: Element>() -> Self {
        Self {
            code: T::CODE,
            size: size_of::<T>(),
            decode: decode_element::<T>,
            encode: encode_element::<T>,
        }
    }

    /// Find the descriptor for a tag character
    pub fn lookup(code: char) -> Option<&'static FormatDescriptor> {
        FORMAT_TABLE.iter().find(|d| d.code.as_char() == code)
    }

    /// Like [`FormatDescriptor::lookup`], reporting unknown tags as an error
    pub fn resolve(code: char) -> Result<&'static FormatDescriptor> {
        Self::lookup(code).ok_or(SmmapError::InvalidFormatCode)
    }

    /// Interpret `bytes[..self.size]` as this format's value
    ///
    /// Panics if `bytes` is shorter than one element.
    pub fn decode(&self, bytes: &[u8]) -> Number {
        (self.decode)(bytes)
    }

    /// Validate `value` and write it into `bytes[..self.size]`
    ///
    /// On error nothing is written. Panics if `bytes` is shorter than one
    /// element.
    pub fn encode(&self, value: Number, bytes: &mut [u8]) -> Result<()> {
        (self.encode)(value, bytes)
    }
}

impl core::fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("code", &self.code)
            .field("size", &self.size)
            .finish()
    }
}

impl PartialEq for FormatDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for FormatDescriptor {}

/// Every supported format, indexed by [`FormatCode`] order
pub static FORMAT_TABLE: [FormatDescriptor; 10] = [
    FormatDescriptor::of::<i8>(),
    FormatDescriptor::of::<u8>(),
    FormatDescriptor::of::<i16>(),
    FormatDescriptor::of::<u16>(),
    FormatDescriptor::of::<i32>(),
    FormatDescriptor::of::<u32>(),
    FormatDescriptor::of::<i64>(),
    FormatDescriptor::of::<u64>(),
    FormatDescriptor::of::<f32>(),
    FormatDescriptor::of::<f64>(),
];

impl FormatCode {
    /// The registry entry for this code
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &FORMAT_TABLE[self.table_index()]
    }
}

/// Find the descriptor for a tag character
pub fn lookup(code: char) -> Option<&'static FormatDescriptor> {
    FormatDescriptor::lookup(code)
}
