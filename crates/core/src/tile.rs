//! Tile extraction and local buffer ownership.
//!
//! A tile is the "shared memory" of the GPU analogy: a small contiguous
//! buffer holding a copy of one rectangular sub-region of the source matrix.
//! The buffer lives on the heap, so its base address is stable for the whole
//! life of the tile and can be read out for address and cache-line displays.
//! The base is only ever exposed as a number; nothing dereferences it.

use tracing::debug;

use crate::common::addr::ByteAddr;
use crate::common::error::{SimError, SimResult};
use crate::matrix::Matrix;

/// A contiguous, row-major local copy of a `size × size` matrix sub-region.
///
/// Element `(x, y)` of the tile lives at index `y * size + x`. The tile is
/// created fresh for each demonstration run and dropped when the run returns;
/// no other component holds a reference to its storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    size: usize,
    data: Vec<i32>,
}

impl Tile {
    /// Copies a `size × size` sub-block of `matrix` starting at
    /// `(tile_x, tile_y)` into a freshly allocated buffer.
    ///
    /// Bounds are validated before any element is read: the request must
    /// satisfy `tile_x + size <= N` and `tile_y + size <= N`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TileOutOfRange`] naming the offending coordinates
    /// and the matrix bounds when the sub-block does not fit.
    pub fn load(matrix: &Matrix, tile_x: usize, tile_y: usize, size: usize) -> SimResult<Self> {
        let n = matrix.size();
        if tile_x.checked_add(size).is_none_or(|end| end > n)
            || tile_y.checked_add(size).is_none_or(|end| end > n)
        {
            return Err(SimError::TileOutOfRange {
                tile_x,
                tile_y,
                tile_size: size,
                matrix_size: n,
            });
        }

        let mut data = Vec::with_capacity(size * size);
        for j in 0..size {
            data.extend_from_slice(&matrix.row(tile_y + j)[tile_x..tile_x + size]);
        }
        debug!(tile_x, tile_y, size, "tile loaded from matrix");
        Ok(Self { size, data })
    }

    /// Builds a tile of the given side length filled with one value.
    ///
    /// Used for the all-ones operand of the dot-product demonstration.
    pub fn filled(size: usize, value: i32) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    /// Side length T of the tile.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of elements (`T²`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.size * self.size
    }

    /// Whether the tile holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the element at tile-local column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.size + x]
    }

    /// All elements in row-major order.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.data
    }

    /// One tile row.
    #[inline]
    pub fn row(&self, y: usize) -> &[i32] {
        &self.data[y * self.size..(y + 1) * self.size]
    }

    /// The base address of the tile's backing storage.
    ///
    /// Heap storage never relocates while the tile is alive, so the value is
    /// stable for the duration of any inspection. It is a display value only.
    #[inline]
    pub fn base_addr(&self) -> ByteAddr {
        ByteAddr::new(self.data.as_ptr() as usize)
    }

    /// Duplicates the tile's contents into a second, independent buffer.
    pub fn duplicate(&self) -> Self {
        Self {
            size: self.size,
            data: self.data.clone(),
        }
    }
}
