//! Reference reductions and reuse simulations.
//!
//! All arithmetic here uses two's-complement wraparound, matching fixed-width
//! signed overflow semantics: no saturation, no panic. This keeps the results
//! deterministic at every geometry, including adversarial element values.
//!
//! The "warp" and "async copy" operations borrow GPU vocabulary but execute
//! sequentially on the calling thread; they demonstrate access patterns, not
//! concurrency.

use tracing::debug;

use crate::tile::Tile;

/// Wrapping sum of all tile elements.
pub fn sum(tile: &Tile) -> i32 {
    tile.values().iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

/// Dot product of the tile with a same-shape all-ones tile.
///
/// Demonstrates a second reduction pattern over the same buffer; by
/// construction the result equals [`sum`].
pub fn dot_with_ones(tile: &Tile) -> i32 {
    let ones = Tile::filled(tile.size(), 1);
    tile.values()
        .iter()
        .zip(ones.values())
        .fold(0i32, |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b)))
}

/// Per-warp sums for `warp_count` sequential warp indices.
///
/// Warp `w` recomputes `Σ (tile[i] + w)` over the resident tile without
/// reloading it, so each result exceeds the previous by the element count.
pub fn warp_sums(tile: &Tile, warp_count: usize) -> Vec<i32> {
    (0..warp_count as i32)
        .map(|w| {
            let total = tile
                .values()
                .iter()
                .fold(0i32, |acc, &v| acc.wrapping_add(v.wrapping_add(w)));
            debug!(warp = w, total, "warp reuse pass complete");
            total
        })
        .collect()
}

/// Duplicates the tile into a second buffer and sums the copy.
///
/// Models a fire-and-forget copy whose completion is awaited before the sum
/// is taken; the copy is lossless, so the result equals [`sum`] of the
/// original.
pub fn copy_sum(tile: &Tile) -> (Tile, i32) {
    let copy = tile.duplicate();
    let total = sum(&copy);
    debug!(total, "copy complete");
    (copy, total)
}
