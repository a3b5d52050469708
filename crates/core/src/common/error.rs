//! Simulator error definitions.
//!
//! This module defines the failure modes of a demonstration run:
//! 1. **Out-of-range tile request:** The requested sub-block exceeds the
//!    matrix bounds; detected before any copy is attempted.
//! 2. **Render failure:** The report sink rejected a write.
//!
//! Arithmetic overflow in the reductions is wraparound by design and is not
//! an error.

use thiserror::Error;

/// Errors produced by the tiling simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The requested tile extends past the matrix bounds.
    ///
    /// Reported with the offending coordinates and the bounds so the message
    /// identifies exactly which constraint failed. No element is read when
    /// this is raised.
    #[error(
        "tile request out of range: tile at ({tile_x}, {tile_y}) with size {tile_size} \
         exceeds {matrix_size}x{matrix_size} matrix bounds \
         (requires tile_x + size <= {matrix_size} and tile_y + size <= {matrix_size})"
    )]
    TileOutOfRange {
        /// Column of the requested tile's top-left corner.
        tile_x: usize,
        /// Row of the requested tile's top-left corner.
        tile_y: usize,
        /// Requested tile side length.
        tile_size: usize,
        /// Side length of the source matrix.
        matrix_size: usize,
    },

    /// Writing the report to the output sink failed.
    #[error("failed to write report: {0}")]
    Render(#[from] std::io::Error),
}

/// Result alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
