//! Access modes for a mapping

use crate::SmmapError;

/// Requested access for a mapping
///
/// The raw values are stable: `0` default, `1` read-only, `2` read-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum AccessMode {
    /// Readable and writable
    #[default]
    Default = 0,
    /// Readable only; every mutating call fails
    ReadOnly = 1,
    /// Readable and writable
    ReadWrite = 2,
}

/// Raw value of [`AccessMode::ReadOnly`]
pub const ACCESS_READ: i32 = AccessMode::ReadOnly as i32;
/// Raw value of [`AccessMode::ReadWrite`]
pub const ACCESS_WRITE: i32 = AccessMode::ReadWrite as i32;

/// Page protection that an access mode translates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Read,
    ReadWrite,
}

impl AccessMode {
    /// Whether mutating operations are permitted
    pub const fn is_writable(self) -> bool {
        !matches!(self, AccessMode::ReadOnly)
    }

    pub const fn protection(self) -> Protection {
        match self {
            AccessMode::ReadOnly => Protection::Read,
            AccessMode::ReadWrite | AccessMode::Default => Protection::ReadWrite,
        }
    }

    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for AccessMode {
    type Error = SmmapError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccessMode::Default),
            1 => Ok(AccessMode::ReadOnly),
            2 => Ok(AccessMode::ReadWrite),
            _ => Err(SmmapError::InvalidAccessMode),
        }
    }
}

impl core::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessMode::Default => write!(f, "default"),
            AccessMode::ReadOnly => write!(f, "read-only"),
            AccessMode::ReadWrite => write!(f, "read-write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(AccessMode::try_from(0), Ok(AccessMode::Default));
        assert_eq!(AccessMode::try_from(ACCESS_READ), Ok(AccessMode::ReadOnly));
        assert_eq!(AccessMode::try_from(ACCESS_WRITE), Ok(AccessMode::ReadWrite));
        assert_eq!(AccessMode::try_from(3), Err(SmmapError::InvalidAccessMode));
        assert_eq!(AccessMode::try_from(-1), Err(SmmapError::InvalidAccessMode));
        assert_eq!(AccessMode::default(), AccessMode::Default);
    }

    #[test]
    fn test_protection() {
        assert_eq!(AccessMode::ReadOnly.protection(), Protection::Read);
        assert_eq!(AccessMode::ReadWrite.protection(), Protection::ReadWrite);
        assert_eq!(AccessMode::Default.protection(), Protection::ReadWrite);
        assert!(AccessMode::Default.is_writable());
        assert!(!AccessMode::ReadOnly.is_writable());
    }
}
