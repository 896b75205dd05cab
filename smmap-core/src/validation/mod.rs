//! Validation utilities for typed views
//!
//! This module contains pure validation functions with no I/O dependencies:
//! index and range arithmetic, raw parameter checks, and literal parsing.

pub mod bounds;
pub mod params;
pub mod parsing;

pub use bounds::{check_index, checked_byte_len, clamp_range, element_window, range_window};
pub use params::{validate_offset, validate_size};
pub use parsing::{parse_number, parse_range};
