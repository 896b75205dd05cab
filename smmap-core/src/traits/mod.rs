//! Abstract interfaces shared by typed views
//!
//! Traits are pure interfaces plus the default behaviour every fixed-length
//! view shares; concrete storage lives in the `smmap` crate.

pub mod access;
pub mod element;
pub mod sequence;

pub use access::AccessControl;
pub use element::Element;
#[cfg(feature = "alloc")]
pub use sequence::SliceOperations;
pub use sequence::FixedSequence;
