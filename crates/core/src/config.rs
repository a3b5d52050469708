//! Configuration for the tiling simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! demonstration run. It provides:
//! 1. **Defaults:** The reference geometry (8×8 matrix, 4×4 tile, 64-byte
//!    cache line, 4-byte elements) and run parameters (tile at (2, 3), 3 warps).
//! 2. **Structures:** Hierarchical config for cache geometry and the run.
//!
//! The CLI uses `Config::default()`; the structures deserialize from JSON so
//! alternate geometries can be driven from data in tests.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the reference demonstration when not explicitly
/// overridden.
mod defaults {
    /// Side length of the square source matrix (8 → 64 elements).
    pub const MATRIX_SIZE: usize = 8;

    /// Side length of the square tile (4 → 16 elements).
    pub const TILE_SIZE: usize = 4;

    /// Column of the tile's top-left corner in the source matrix.
    pub const TILE_X: usize = 2;

    /// Row of the tile's top-left corner in the source matrix.
    pub const TILE_Y: usize = 3;

    /// Cache line size in bytes.
    ///
    /// Matches typical modern processor cache line sizes; with 4-byte
    /// elements, 16 consecutive elements share one line.
    pub const CACHE_LINE: usize = 64;

    /// Width of one tile element in bytes (`i32`).
    pub const ELEM_BYTES: usize = 4;

    /// Number of simulated warp iterations reusing the resident tile.
    pub const WARP_COUNT: usize = 3;
}

/// Cache and element geometry for address and line calculations.
///
/// The reference build hardcodes a 64-byte line and 4-byte elements; they are
/// named configuration values here so line-boundary behavior can be exercised
/// against alternate geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Side length N of the square source matrix.
    pub matrix_size: usize,
    /// Side length T of the square tile; requires `T <= N` for any valid load.
    pub tile_size: usize,
    /// Cache line size in bytes.
    pub cache_line: usize,
    /// Width of one element in bytes.
    pub elem_bytes: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            matrix_size: defaults::MATRIX_SIZE,
            tile_size: defaults::TILE_SIZE,
            cache_line: defaults::CACHE_LINE,
            elem_bytes: defaults::ELEM_BYTES,
        }
    }
}

/// Parameters for one demonstration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Column of the tile's top-left corner.
    pub tile_x: usize,
    /// Row of the tile's top-left corner.
    pub tile_y: usize,
    /// Number of warp iterations to simulate.
    pub warp_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tile_x: defaults::TILE_X,
            tile_y: defaults::TILE_Y,
            warp_count: defaults::WARP_COUNT,
        }
    }
}

/// Root configuration: cache geometry plus run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache and element geometry.
    pub geometry: GeometryConfig,
    /// Run parameters (tile coordinates, warp count).
    pub run: RunConfig,
}
