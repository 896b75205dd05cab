//! Element format definitions
//!
//! Format codes, their byte widths, and the process-wide descriptor table
//! used to decode and encode mapped elements.

pub mod code;
pub mod registry;

pub use code::FormatCode;
pub use registry::{lookup, DecodeFn, EncodeFn, FormatDescriptor, FORMAT_TABLE};
