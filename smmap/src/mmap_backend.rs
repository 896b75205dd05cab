//! Memory-mapped backend for typed views
//!
//! This module owns the operating-system mapping and the typed accessors
//! layered over it. It is organized into:
//!
//! - `region`: lifetime of a single shared mapping
//! - `typed_view`: element-indexed reads and writes over a region
//! - `file_io`: opening views by path and preparing backing files

pub mod file_io;
pub mod region;
pub mod typed_view;

pub use file_io::{create_backing_file, open_path};
pub use region::MappedRegion;
pub use typed_view::{Elements, TypedView};
