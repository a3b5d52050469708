//! Deterministic source matrix.
//!
//! The matrix plays the role of "global memory" in the GPU analogy: a large,
//! slow region that tiles are staged out of. Its contents are fixed at
//! construction so every derived value in the demonstration is reproducible.

/// A square N×N grid of integers with `matrix[y][x] = y*N + x`.
///
/// Stored row-major in one contiguous allocation; immutable after creation
/// and owned by the driver for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Builds the generator matrix of side length `n`.
    pub fn new(n: usize) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for y in 0..n {
            for x in 0..n {
                data.push((y * n + x) as i32);
            }
        }
        Self { n, data }
    }

    /// Side length N of the matrix.
    #[inline]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// Returns the element at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= N` or `y >= N`. Tile loads validate their bounds
    /// before calling this.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        assert!(x < self.n && y < self.n, "matrix index ({x}, {y}) out of bounds");
        self.data[y * self.n + x]
    }

    /// Returns one full row of the matrix.
    #[inline]
    pub fn row(&self, y: usize) -> &[i32] {
        &self.data[y * self.n..(y + 1) * self.n]
    }
}
