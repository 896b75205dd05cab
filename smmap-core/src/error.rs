//! Error types for typed memory-map operations

use crate::format::FormatCode;

/// Errors that can occur while constructing or accessing a typed view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmmapError {
    /// Type tag outside `b,B,h,H,i,I,l,L,f,d`
    InvalidFormatCode,
    /// Negative element count, or a byte length that overflows
    InvalidSize,
    /// Negative file offset
    InvalidOffset,
    /// Access mode outside the recognized set
    InvalidAccessMode,
    /// Operation attempted after the mapping was released
    ClosedMapping,
    /// Single-element access outside `[0, len)`
    IndexOutOfRange { index: isize, len: usize },
    /// Range assignment value count differs from the target range length
    WrongSliceLength { expected: usize, actual: usize },
    /// Mutating call on a read-only view
    ReadOnlyViolation,
    /// Value not representable in the target format
    ValueOutOfRange { code: FormatCode },
    /// Value kind not accepted by the target format (float into an integer slot)
    InvalidValueType { code: FormatCode },
    /// Concatenation, repetition or deletion
    UnsupportedOperation,
    /// Typed slice requested with an element type other than the bound format
    TypeMismatch,
    /// Mapped address not aligned for the requested element type
    Misaligned,
    /// Text could not be parsed as a value or range
    InvalidLiteral,
}

/// Coarse grouping of [`SmmapError`] kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected while validating construction parameters
    Construction,
    /// The mapping is no longer usable
    Lifecycle,
    /// Index, range or layout problems
    Bounds,
    /// Write attempted without write permission
    Access,
    /// The supplied value cannot be stored
    Value,
    /// The operation is never supported
    Unsupported,
}

impl SmmapError {
    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SmmapError::InvalidFormatCode
            | SmmapError::InvalidSize
            | SmmapError::InvalidOffset
            | SmmapError::InvalidAccessMode => ErrorCategory::Construction,
            SmmapError::ClosedMapping => ErrorCategory::Lifecycle,
            SmmapError::IndexOutOfRange { .. }
            | SmmapError::WrongSliceLength { .. }
            | SmmapError::Misaligned => ErrorCategory::Bounds,
            SmmapError::ReadOnlyViolation => ErrorCategory::Access,
            SmmapError::ValueOutOfRange { .. }
            | SmmapError::InvalidValueType { .. }
            | SmmapError::TypeMismatch
            | SmmapError::InvalidLiteral => ErrorCategory::Value,
            SmmapError::UnsupportedOperation => ErrorCategory::Unsupported,
        }
    }
}

impl core::fmt::Display for SmmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmmapError::InvalidFormatCode => write!(f, "Unknown element format code"),
            SmmapError::InvalidSize => write!(f, "Mapped element count must be non-negative"),
            SmmapError::InvalidOffset => write!(f, "Mapped offset must be non-negative"),
            SmmapError::InvalidAccessMode => write!(f, "Invalid access mode"),
            SmmapError::ClosedMapping => write!(f, "Mapping is closed"),
            SmmapError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for {len} elements")
            }
            SmmapError::WrongSliceLength { expected, actual } => write!(
                f,
                "Slice assignment expects {expected} values, got {actual}"
            ),
            SmmapError::ReadOnlyViolation => write!(f, "Cannot modify a read-only mapping"),
            SmmapError::ValueOutOfRange { code } => {
                let (min, max) = code.bounds();
                write!(f, "Format '{code}' requires {min} <= number <= {max}")
            }
            SmmapError::InvalidValueType { code } => {
                write!(f, "Format '{code}' requires an integer argument")
            }
            SmmapError::UnsupportedOperation => {
                write!(f, "Typed maps have a fixed length and do not support this operation")
            }
            SmmapError::TypeMismatch => write!(f, "Element type does not match the mapped format"),
            SmmapError::Misaligned => write!(f, "Mapped data is not aligned for the element type"),
            SmmapError::InvalidLiteral => write!(f, "Invalid numeric literal"),
        }
    }
}

impl core::error::Error for SmmapError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, SmmapError>;
