//! Fixed-length sequence protocol for typed views
//!
//! A view is a window of constant length: elements can be read and
//! overwritten, but never inserted, removed, concatenated or repeated. The
//! default methods here encode those rejections once for every implementor.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{validation::check_index, Number, SmmapError};

/// Element-indexed access to a fixed-length sequence
pub trait FixedSequence {
    /// Error type; must be able to carry core validation failures
    type Error: From<SmmapError>;

    /// Number of elements
    fn len(&self) -> Result<usize, Self::Error>;

    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.len()? == 0)
    }

    /// Read the element at `index`
    fn get_item(&self, index: isize) -> Result<Number, Self::Error>;

    /// Overwrite the element at `index`
    fn set_item(&mut self, index: isize, value: Number) -> Result<(), Self::Error>;

    /// Always fails: the sequence cannot grow
    fn concat(&self, _other: &Self) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        self.len()?;
        Err(SmmapError::UnsupportedOperation.into())
    }

    /// Always fails: the sequence cannot grow
    fn repeat(&self, _count: usize) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        self.len()?;
        Err(SmmapError::UnsupportedOperation.into())
    }

    /// Always fails once the index is known to be valid
    fn del_item(&mut self, index: isize) -> Result<(), Self::Error> {
        let len = self.len()?;
        check_index(index, len)?;
        Err(SmmapError::UnsupportedOperation.into())
    }

    /// Always fails: the length is fixed for the life of the sequence
    fn del_slice(&mut self, _low: isize, _high: isize) -> Result<(), Self::Error> {
        self.len()?;
        Err(SmmapError::UnsupportedOperation.into())
    }
}

/// Range reads and exact-length range writes (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait SliceOperations: FixedSequence {
    /// Elements in the clamped range `[low, high)`, in ascending index order
    fn get_slice(&self, low: isize, high: isize) -> Result<Vec<Number>, Self::Error>;

    /// Overwrite the clamped range `[low, high)`; `values` must match its
    /// length exactly and either every element is written or none is
    fn set_slice(&mut self, low: isize, high: isize, values: &[Number]) -> Result<(), Self::Error>;
}
