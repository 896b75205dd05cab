//! Error type for mapping and file operations

use std::{io, path::PathBuf};

use smmap_core::SmmapError;
use thiserror::Error;

/// Errors surfaced by typed views and their file helpers
#[derive(Error, Debug)]
pub enum Error {
    /// Validation, access or value failure reported by the core layer
    #[error(transparent)]
    Core(#[from] SmmapError),

    /// The operating system refused the mapping; the OS error is kept verbatim
    #[error("Memory mapping failed: {0}")]
    MapFailed(#[source] io::Error),

    /// A path-based helper could not open or create its file
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error while preparing a backing file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The core error kind, if this is one
    pub fn as_core(&self) -> Option<SmmapError> {
        match self {
            Error::Core(err) => Some(*err),
            _ => None,
        }
    }

    /// OS error number for mapping, open and I/O failures
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Core(_) => None,
            Error::MapFailed(err) | Error::Io(err) => err.raw_os_error(),
            Error::Open { source, .. } => source.raw_os_error(),
        }
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err = Error::from(SmmapError::ClosedMapping);
        assert_eq!(err.to_string(), "Mapping is closed");
        assert_eq!(err.as_core(), Some(SmmapError::ClosedMapping));
        assert_eq!(err.raw_os_error(), None);
    }

    #[test]
    fn test_map_failed_keeps_os_error() {
        let err = Error::MapFailed(io::Error::from_raw_os_error(13));
        assert_eq!(err.raw_os_error(), Some(13));
        assert!(err.as_core().is_none());
        assert!(err.to_string().starts_with("Memory mapping failed"));
    }

    #[test]
    fn test_open_error_names_path() {
        let err = Error::Open {
            path: PathBuf::from("/no/such/file.bin"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/no/such/file.bin"));
    }
}
