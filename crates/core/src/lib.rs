//! Shared-memory tiling simulator library.
//!
//! This crate models how a fixed-size submatrix ("tile") copied into a fast
//! local buffer maps onto byte addresses and cache lines, mimicking GPU
//! shared-memory tiling on a single CPU thread. It provides:
//! 1. **Matrix:** A deterministic square source matrix (`matrix[y][x] = y*N + x`).
//! 2. **Tile:** A contiguous local copy of a rectangular sub-region, with a
//!    stable, inspectable base address for the duration of one run.
//! 3. **Inspection:** Derived per-element address and cache-line views,
//!    parameterized over cache geometry.
//! 4. **Reductions:** Wrapping sum, dot-product-with-ones, simulated warp
//!    reuse, and a synchronous "async copy" duplication.
//! 5. **Orchestration:** A [`TileInspector`] that renders the full
//!    demonstration sequence to any [`std::io::Write`] sink.
//!
//! Everything runs sequentially and deterministically; the GPU vocabulary
//! ("warp", "async copy") names access patterns, not real concurrency.

/// Common types (byte addresses, errors).
pub mod common;
/// Simulator configuration (defaults, geometry, run parameters).
pub mod config;
/// Derived address and cache-line views over a tile's storage.
pub mod inspect;
/// Demonstration orchestrator and report rendering.
pub mod inspector;
/// Deterministic source matrix.
pub mod matrix;
/// Reference reductions and reuse simulations.
pub mod reduce;
/// Tile extraction and local buffer ownership.
pub mod tile;

/// Root configuration type; use `Config::default()` for the reference demo.
pub use crate::config::Config;
/// Orchestrator for one full demonstration run.
pub use crate::inspector::TileInspector;
/// Deterministic N×N source matrix.
pub use crate::matrix::Matrix;
/// Contiguous local copy of a matrix sub-region.
pub use crate::tile::Tile;

/// Simulator error type.
pub use crate::common::error::SimError;
/// Result alias used throughout the crate.
pub use crate::common::error::SimResult;
