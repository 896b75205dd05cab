#![no_std]

//! SMMAP Core - Element formats and validation for typed memory maps
//!
//! This crate provides the pieces of a typed memory-map view that need no
//! operating-system support: the fixed element format table, the normalized
//! value type, access modes, the sequence protocol traits, and the bounds
//! and parameter validation every view performs before touching memory.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod access;
pub mod error;
pub mod format;
pub mod number;
pub mod traits;
pub mod validation;

pub use access::{AccessMode, Protection, ACCESS_READ, ACCESS_WRITE};
pub use error::*;
pub use format::*;
pub use number::Number;
pub use traits::*;
pub use validation::{check_index, checked_byte_len, clamp_range, parse_number, parse_range};
