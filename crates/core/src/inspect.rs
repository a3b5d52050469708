//! Derived address and cache-line views.
//!
//! These views are computed from a buffer base address and a geometry; they
//! never touch the tile's contents and never dereference the addresses they
//! report. Taking the base explicitly keeps the arithmetic testable against
//! synthetic bases and alternate line sizes.

use crate::common::addr::ByteAddr;
use crate::config::GeometryConfig;

/// Where one tile element lives relative to the buffer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRecord {
    /// Row-major element index within the tile.
    pub index: usize,
    /// Absolute byte address of the element.
    pub addr: ByteAddr,
    /// Byte offset of the element from the buffer base.
    pub offset: usize,
}

/// Which cache line one tile element falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLineRecord {
    /// Row-major element index within the tile.
    pub index: usize,
    /// Absolute byte address of the element.
    pub addr: ByteAddr,
    /// Cache line number (`addr / line_size`).
    pub line: usize,
    /// True when this element's line differs from its predecessor's.
    ///
    /// The first element has no predecessor and is never marked; every line
    /// change after it is.
    pub new_line: bool,
}

/// Computes the per-element address map for `len` elements of `elem_bytes`
/// bytes each, starting at `base`.
///
/// Element `i` lives at `base + i * elem_bytes`.
pub fn address_map(base: ByteAddr, len: usize, elem_bytes: usize) -> Vec<AddressRecord> {
    (0..len)
        .map(|index| {
            let addr = base.add_bytes(index * elem_bytes);
            AddressRecord {
                index,
                addr,
                offset: addr.offset_from(base),
            }
        })
        .collect()
}

/// Computes the cache-line membership of `len` elements starting at `base`
/// under the given geometry.
///
/// An element's line number is its address divided by the line size; a
/// boundary is flagged whenever consecutive elements land on different lines.
/// How often that happens, and at which index the first boundary falls, is
/// determined entirely by `base % cache_line`.
pub fn cache_line_map(base: ByteAddr, len: usize, geometry: &GeometryConfig) -> Vec<CacheLineRecord> {
    let mut prev_line = None;
    (0..len)
        .map(|index| {
            let addr = base.add_bytes(index * geometry.elem_bytes);
            let line = addr.line_number(geometry.cache_line);
            let new_line = prev_line.is_some_and(|prev| prev != line);
            prev_line = Some(line);
            CacheLineRecord {
                index,
                addr,
                line,
                new_line,
            }
        })
        .collect()
}
