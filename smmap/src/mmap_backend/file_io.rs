//! Path-based helpers for typed views
//!
//! Views map raw descriptors; these helpers cover the common case of a file
//! on disk, opening it with permissions that match the requested access.

use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use smmap_core::{validation::checked_byte_len, FormatCode, SmmapError};
use tracing::warn;

use super::typed_view::TypedView;
use crate::{config::MapOptions, Error, Result};

/// Open `path` and map `element_count` elements of `code` from it
///
/// The file is opened read-only for [`smmap_core::AccessMode::ReadOnly`] and
/// read-write otherwise. The descriptor is closed before returning; the
/// mapping keeps the file contents reachable.
pub fn open_path(
    path: impl AsRef<Path>,
    element_count: usize,
    code: FormatCode,
    options: &MapOptions,
) -> Result<TypedView> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .read(true)
        .write(options.access.is_writable())
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
    TypedView::open_file(&file, element_count, code, options)
}

/// Create (or truncate) `path` as a zero-filled file that can back
/// `element_count` elements of `code` starting at byte `offset`
///
/// If the file cannot be sized it is removed again before the error is
/// returned.
pub fn create_backing_file(
    path: impl AsRef<Path>,
    element_count: usize,
    code: FormatCode,
    offset: u64,
) -> Result<File> {
    let path = path.as_ref();
    let data_len = checked_byte_len(element_count, code.size_bytes())?;
    let total_len = offset
        .checked_add(data_len as u64)
        .ok_or(SmmapError::InvalidSize)?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
    if let Err(err) = file.set_len(total_len) {
        drop(file);
        if let Err(cleanup) = std::fs::remove_file(path) {
            warn!("Failed to remove {} after sizing error: {}", path.display(), cleanup);
        }
        return Err(Error::Io(err));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smmap_core::{AccessMode, Number};

    #[test]
    fn test_create_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.bin");

        let file = create_backing_file(&path, 6, FormatCode::F32, 8).unwrap();
        assert_eq!(file.metadata().unwrap().len(), 8 + 6 * 4);
        drop(file);

        let options = MapOptions::read_write().with_offset(8);
        let mut view = open_path(&path, 6, FormatCode::F32, &options).unwrap();
        view.set_item(5, 0.75f32).unwrap();
        drop(view);

        let read_only = options.with_access(AccessMode::ReadOnly);
        let view = open_path(&path, 6, FormatCode::F32, &read_only).unwrap();
        assert_eq!(view.get_item(5).unwrap(), Number::Float(0.75));
        assert_eq!(view.get_item(0).unwrap(), Number::Float(0.0));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.bin");
        let err = open_path(&path, 1, FormatCode::U8, &MapOptions::read_only()).unwrap_err();
        match err {
            Error::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsizable_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unsizable.bin");
        // Fits in u64 but not in the platform's signed file length
        let err = create_backing_file(&path, 1, FormatCode::U8, u64::MAX - 1).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_oversized_backing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.bin");
        let err = create_backing_file(&path, usize::MAX, FormatCode::F64, 0).unwrap_err();
        assert_eq!(err.as_core(), Some(SmmapError::InvalidSize));
        assert!(!path.exists());
    }
}
