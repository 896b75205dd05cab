//! Index, range and byte-length validation for typed views
//!
//! Pure arithmetic on element counts; nothing here touches memory.

use core::ops::Range;

use crate::{Result, SmmapError};

/// Validate a single-element index against `len`
///
/// Negative indices are rejected rather than counted from the end.
pub const fn check_index(index: isize, len: usize) -> Result<usize> {
    if index < 0 || index as usize >= len {
        return Err(SmmapError::IndexOutOfRange { index, len });
    }
    Ok(index as usize)
}

/// Clamp a `[low, high)` element range into `[0, len]`
///
/// `low` clamps to `[0, len]` and `high` to `[low, len]`. Negative bounds
/// clamp to zero; they are never wrapped from the end.
pub fn clamp_range(low: isize, high: isize, len: usize) -> Range<usize> {
    let low = clamp_bound(low, len);
    let high = clamp_bound(high, len).max(low);
    low..high
}

const fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        0
    } else if bound as usize > len {
        len
    } else {
        bound as usize
    }
}

/// Total bytes for `count` elements of `element_size` bytes
///
/// Lengths that overflow or exceed `isize::MAX` cannot back a slice and are
/// reported as [`SmmapError::InvalidSize`].
pub const fn checked_byte_len(count: usize, element_size: usize) -> Result<usize> {
    match count.checked_mul(element_size) {
        Some(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(SmmapError::InvalidSize),
    }
}

/// Byte window occupied by element `index`
pub const fn element_window(index: usize, element_size: usize) -> Range<usize> {
    let start = index * element_size;
    start..start + element_size
}

/// Byte window occupied by an element range
pub const fn range_window(range: &Range<usize>, element_size: usize) -> Range<usize> {
    range.start * element_size..range.end * element_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 10), Ok(0));
        assert_eq!(check_index(9, 10), Ok(9));
        assert_eq!(
            check_index(10, 10),
            Err(SmmapError::IndexOutOfRange { index: 10, len: 10 })
        );
        assert_eq!(
            check_index(-1, 10),
            Err(SmmapError::IndexOutOfRange { index: -1, len: 10 })
        );
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(0, 10, 10), 0..10);
        assert_eq!(clamp_range(2, 5, 10), 2..5);
        // Negative bounds clamp to zero, not from the end
        assert_eq!(clamp_range(-3, 4, 10), 0..4);
        assert_eq!(clamp_range(-5, -1, 10), 0..0);
        // Past the end
        assert_eq!(clamp_range(8, 100, 10), 8..10);
        assert_eq!(clamp_range(20, 30, 10), 10..10);
        // Inverted ranges collapse to empty at low
        assert_eq!(clamp_range(6, 3, 10), 6..6);
        assert_eq!(clamp_range(isize::MIN, isize::MAX, 3), 0..3);
    }

    #[test]
    fn test_checked_byte_len() {
        assert_eq!(checked_byte_len(10, 4), Ok(40));
        assert_eq!(checked_byte_len(0, 8), Ok(0));
        assert_eq!(
            checked_byte_len(usize::MAX, 2),
            Err(SmmapError::InvalidSize)
        );
        assert_eq!(
            checked_byte_len(isize::MAX as usize, 2),
            Err(SmmapError::InvalidSize)
        );
    }

    #[test]
    fn test_windows() {
        assert_eq!(element_window(3, 4), 12..16);
        assert_eq!(range_window(&(2..5), 8), 16..40);
    }
}
