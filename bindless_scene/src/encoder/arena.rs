//! Fixed-capacity byte arena backing the scene buffer.
//!
//! Storage is allocated once. The logical length moves forward as sections
//! are appended and is rewound on reset; bytes past it are never exposed.
//! Typed reads and writes go through `bytemuck`, so no raw pointer casting
//! is needed to view header fields or records.

use bytemuck::Pod;
use std::fmt;
use std::mem::{align_of, size_of};
use std::ops::Range;
use crate::error::{Error, Result};
use super::layout::align_up;

/// Byte arena with a fixed capacity and a logical length
#[derive(Clone)]
pub struct Arena {
    bytes: Vec<u8>,
    len: usize,
}

impl Arena {
    /// Allocate `capacity` zeroed bytes with a logical length of 0
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity],
            len: 0,
        }
    }

    // ===== SIZE =====

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still available before the capacity is reached
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Check that `additional` more bytes fit without touching the arena
    pub fn ensure_available(&self, additional: usize) -> Result<()> {
        let requested = self.len.saturating_add(additional);
        if requested > self.capacity() {
            return Err(Error::CapacityExceeded {
                requested,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Set the logical length, keeping storage. Bytes past `len` are left as-is.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub fn rewind(&mut self, len: usize) {
        assert!(len <= self.capacity(), "rewind to {} past capacity {}", len, self.capacity());
        self.len = len;
    }

    // ===== VIEWS =====

    /// The logical bytes `[0, len)`
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    // ===== TYPED ACCESS =====

    /// Read a `T` at a byte offset inside the logical length.
    ///
    /// # Panics
    ///
    /// Panics if the value does not lie within `[0, len)`.
    pub fn read<T: Pod>(&self, offset: usize) -> T {
        let range = self.typed_range::<T>(offset);
        bytemuck::pod_read_unaligned(&self.bytes[range])
    }

    /// Overwrite a `T` at a byte offset inside the logical length.
    ///
    /// # Panics
    ///
    /// Panics if the value does not lie within `[0, len)`.
    pub fn write<T: Pod>(&mut self, offset: usize, value: &T) {
        let range = self.typed_range::<T>(offset);
        self.bytes[range].copy_from_slice(bytemuck::bytes_of(value));
    }

    /// Append `items` at the end of the logical length.
    ///
    /// Returns the byte offset the items were written at. On
    /// `CapacityExceeded` nothing is written.
    pub fn append<T: Pod>(&mut self, items: &[T]) -> Result<usize> {
        let data: &[u8] = bytemuck::cast_slice(items);
        self.ensure_available(data.len())?;

        let start = self.len;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        self.len += data.len();
        Ok(start)
    }

    /// Zero-fill up to the next multiple of `alignment` and return the new length
    pub fn pad_to(&mut self, alignment: usize) -> Result<usize> {
        debug_assert!(alignment.is_power_of_two(), "alignment {} is not a power of two", alignment);

        let aligned = align_up(self.len, alignment);
        self.ensure_available(aligned - self.len)?;

        self.bytes[self.len..aligned].fill(0);
        self.len = aligned;
        Ok(aligned)
    }

    /// Zero a byte range inside the logical length
    pub fn zero(&mut self, range: Range<usize>) {
        assert!(range.end <= self.len, "zero {:?} past logical length {}", range, self.len);
        self.bytes[range].fill(0);
    }

    fn typed_range<T: Pod>(&self, offset: usize) -> Range<usize> {
        let end = offset + size_of::<T>();
        assert!(
            end <= self.len,
            "{} bytes at offset {} past logical length {}",
            size_of::<T>(), offset, self.len
        );
        debug_assert!(
            offset % align_of::<T>() == 0,
            "offset {} is not aligned to {}",
            offset, align_of::<T>()
        );
        offset..end
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;
