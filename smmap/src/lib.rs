//! SMMAP - Typed views over memory-mapped file descriptors
//!
//! This library maps a region of an open file and exposes it as a
//! fixed-length sequence of numeric elements of one format: signed or
//! unsigned 8/16/32/64-bit integers, or 32/64-bit floats. Callers read and
//! write elements and element ranges without doing pointer arithmetic or
//! width handling themselves.
//!
//! ## Architecture
//!
//! - **smmap-core**: Format table, value type, access modes, traits and
//!   validation (no I/O, `no_std`)
//! - **smmap**: The memory-mapped backend, mapping options and file helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smmap::{file_io, FormatCode, MapOptions, Number};
//!
//! fn example() -> smmap::Result<()> {
//!     file_io::create_backing_file("values.bin", 10, FormatCode::I32, 0)?;
//!     let mut view = file_io::open_path("values.bin", 10, FormatCode::I32, &MapOptions::read_write())?;
//!
//!     view.set_item(0, 2147483647i64)?;
//!     assert!(view.set_item(0, 2147483648i64).is_err());
//!     assert_eq!(view.get_item(0)?, Number::Int(2147483647));
//!
//!     view.set_slice(1, 4, &[7i32, 8, 9])?;
//!     println!("{:?}", view.get_slice(0, 4)?);
//!     view.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Shared mappings**: Writes are visible to every mapper of the file
//! - **Range-checked encoding**: Values outside a format's range are rejected
//! - **Atomic range assignment**: A failed `set_slice` writes nothing
//! - **Zero-copy slices**: `as_typed::<T>()` when the mapping is aligned

// Re-export core abstractions
pub use smmap_core::{
    // Core traits
    AccessControl, Element, FixedSequence, SliceOperations,
    // Formats and values
    AccessMode, FormatCode, FormatDescriptor, Number, FORMAT_TABLE,
    // Error handling
    ErrorCategory, SmmapError,
    // Validation utilities
    parse_number, parse_range,
};

pub mod config;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

pub use config::MapOptions;
pub use error::{Error, Result};

#[cfg(feature = "mmap")]
pub use mmap_backend::{file_io, Elements, MappedRegion, TypedView};
