//! Byte address type.
//!
//! This module defines a strong type for host byte addresses so that element
//! indices, byte offsets, and absolute addresses cannot be mixed up in the
//! address and cache-line views. Addresses are display values computed from a
//! buffer base; they are never dereferenced.

/// A host byte address observed from a tile's backing storage.
///
/// Obtained once per inspection from the tile's base pointer and held fixed
/// for that call; all per-element addresses derive from it arithmetically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteAddr(pub usize);

impl ByteAddr {
    /// Creates a new byte address from a raw value.
    #[inline]
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline]
    pub const fn val(self) -> usize {
        self.0
    }

    /// Returns the address `count` bytes past this one.
    #[inline]
    pub const fn add_bytes(self, count: usize) -> Self {
        Self(self.0 + count)
    }

    /// Returns the byte offset of this address from `base`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `base` lies above this address; the views in
    /// this crate only ever derive addresses forward from a base.
    #[inline]
    pub const fn offset_from(self, base: Self) -> usize {
        debug_assert!(base.0 <= self.0);
        self.0 - base.0
    }

    /// Returns the cache line number this address falls on for the given
    /// line size in bytes.
    #[inline]
    pub const fn line_number(self, line_size: usize) -> usize {
        self.0 / line_size
    }
}

impl std::fmt::Display for ByteAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
