//! Demonstration orchestrator.
//!
//! [`TileInspector`] owns the source matrix and runs the fixed demonstration
//! sequence for one tile coordinate pair: load, print, address dump,
//! cache-line visualization, reductions, warp reuse, and the synchronous
//! "async" copy. All output goes through an injected [`io::Write`] sink so
//! the library never touches stdout directly.

use std::io;

use tracing::debug;

use crate::common::error::SimResult;
use crate::config::Config;
use crate::inspect::{address_map, cache_line_map};
use crate::matrix::Matrix;
use crate::reduce;
use crate::tile::Tile;

/// Orchestrates one full demonstration run over a deterministic matrix.
///
/// The matrix is built once at construction and reused across runs; the tile
/// buffer is created inside [`TileInspector::run`] and dropped on every exit
/// path, including the out-of-range error path.
#[derive(Debug)]
pub struct TileInspector {
    config: Config,
    matrix: Matrix,
}

impl TileInspector {
    /// Builds the inspector and its source matrix from a configuration.
    pub fn new(config: Config) -> Self {
        let matrix = Matrix::new(config.geometry.matrix_size);
        Self { config, matrix }
    }

    /// The configuration this inspector runs with.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The source matrix.
    #[inline]
    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Executes the demonstration sequence, writing the report to `out`.
    ///
    /// Steps run in fixed order: load, tile print, address dump, cache-line
    /// visualization, sum, dot-with-ones, warp reuse, async copy. Every step
    /// completes before the next begins; nothing here suspends or spawns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::TileOutOfRange`] if the configured tile
    /// does not fit the matrix (detected before any element is copied), or
    /// [`crate::SimError::Render`] if the sink rejects a write.
    pub fn run<W: io::Write>(&self, out: &mut W) -> SimResult<()> {
        let geom = &self.config.geometry;
        let run = &self.config.run;

        writeln!(out, "=== Shared-Memory Tile Simulator ===")?;
        writeln!(
            out,
            "Matrix: {n}x{n}  Tile: {t}x{t} at ({x}, {y})  Cache line: {line} B  Element: {elem} B",
            n = geom.matrix_size,
            t = geom.tile_size,
            x = run.tile_x,
            y = run.tile_y,
            line = geom.cache_line,
            elem = geom.elem_bytes,
        )?;
        writeln!(out)?;

        let tile = Tile::load(&self.matrix, run.tile_x, run.tile_y, geom.tile_size)?;
        debug!(base = %tile.base_addr(), "tile resident in local buffer");

        self.print_tile(out, &tile, "Tile loaded into local buffer:")?;
        self.dump_addresses(out, &tile)?;
        self.visualize_cache_lines(out, &tile)?;

        let total = reduce::sum(&tile);
        writeln!(out, "Sum of tile elements: {total}")?;
        let dot = reduce::dot_with_ones(&tile);
        writeln!(out, "Dot product with all-ones tile: {dot}")?;
        writeln!(out)?;

        writeln!(out, "Warp reuse ({} passes over the resident tile):", run.warp_count)?;
        for (w, warp_total) in reduce::warp_sums(&tile, run.warp_count).iter().enumerate() {
            writeln!(out, "  warp {w}: sum(tile[i] + {w}) = {warp_total}")?;
        }
        writeln!(out)?;

        let (copy, copy_total) = reduce::copy_sum(&tile);
        writeln!(
            out,
            "Async copy complete: {} elements duplicated, sum of copy = {copy_total}",
            copy.len()
        )?;

        Ok(())
    }

    /// Renders the tile as a grid of right-aligned 3-character integer
    /// fields, preceded by a label line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Render`] if the sink rejects a write.
    pub fn print_tile<W: io::Write>(&self, out: &mut W, tile: &Tile, label: &str) -> SimResult<()> {
        writeln!(out, "{label}")?;
        for y in 0..tile.size() {
            for (x, value) in tile.row(y).iter().enumerate() {
                if x > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{value:>3}")?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Reports each element's absolute byte address and offset from the
    /// tile's base address.
    ///
    /// Purely observational: the base is read once and every address derives
    /// from it by arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Render`] if the sink rejects a write.
    pub fn dump_addresses<W: io::Write>(&self, out: &mut W, tile: &Tile) -> SimResult<()> {
        let base = tile.base_addr();
        writeln!(out, "Element addresses (base = {base}):")?;
        for record in address_map(base, tile.len(), self.config.geometry.elem_bytes) {
            writeln!(
                out,
                "  [{index:>2}] addr = {addr}  offset = {offset:>3}",
                index = record.index,
                addr = record.addr,
                offset = record.offset,
            )?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Shows which cache line each element falls on, with a marker at every
    /// line boundary after the first element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Render`] if the sink rejects a write.
    pub fn visualize_cache_lines<W: io::Write>(&self, out: &mut W, tile: &Tile) -> SimResult<()> {
        let geom = &self.config.geometry;
        let base = tile.base_addr();
        writeln!(
            out,
            "Cache-line membership ({line}-byte lines, {per_line} elements per line):",
            line = geom.cache_line,
            per_line = geom.cache_line / geom.elem_bytes,
        )?;
        for record in cache_line_map(base, tile.len(), geom) {
            if record.new_line {
                writeln!(out, "  ---- cache line boundary ----")?;
            }
            writeln!(
                out,
                "  [{index:>2}] line {line}",
                index = record.index,
                line = record.line,
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}
