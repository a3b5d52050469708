//! # Rendering Tests
//!
//! This module verifies report rendering through an injected sink: the
//! right-aligned 3-character tile grid, the address and cache-line sections,
//! and propagation of sink failures.

use std::io;

use pretty_assertions::assert_eq;
use tilesim_core::{Config, Matrix, SimError, Tile, TileInspector};

/// A sink that rejects every write, for error-path tests.
struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn render_tile_grid(inspector: &TileInspector, tile: &Tile, label: &str) -> String {
    let mut out = Vec::new();
    inspector.print_tile(&mut out, tile, label).unwrap();
    String::from_utf8(out).unwrap()
}

/// Tests that the tile grid renders as right-aligned 3-character fields
/// under a label line.
#[test]
fn tile_grid_is_right_aligned_three_wide() {
    let inspector = TileInspector::new(Config::default());
    let matrix = Matrix::new(8);
    let tile = Tile::load(&matrix, 2, 3, 4).unwrap();
    let rendered = render_tile_grid(&inspector, &tile, "Tile:");
    let expected = concat!(
        "Tile:\n",
        " 26  27  28  29\n",
        " 34  35  36  37\n",
        " 42  43  44  45\n",
        " 50  51  52  53\n",
        "\n",
    );
    assert_eq!(rendered, expected);
}

/// Tests that single-digit values pad to three characters.
#[test]
fn tile_grid_pads_small_values() {
    let inspector = TileInspector::new(Config::default());
    let matrix = Matrix::new(8);
    let tile = Tile::load(&matrix, 0, 0, 2).unwrap();
    let rendered = render_tile_grid(&inspector, &tile, "Corner:");
    assert_eq!(rendered, "Corner:\n  0   1\n  8   9\n\n");
}

/// Tests that the address dump reports the tile base and one entry per
/// element with its byte offset.
#[test]
fn address_dump_reports_base_and_offsets() {
    let inspector = TileInspector::new(Config::default());
    let matrix = Matrix::new(8);
    let tile = Tile::load(&matrix, 2, 3, 4).unwrap();

    let mut out = Vec::new();
    inspector.dump_addresses(&mut out, &tile).unwrap();
    let rendered = String::from_utf8(out).unwrap();

    assert!(rendered.contains(&format!("base = {}", tile.base_addr())));
    assert_eq!(rendered.matches("addr = 0x").count(), 16, "one entry per element");
    assert!(rendered.contains("offset =   0"));
    assert!(rendered.contains("offset =  60"));
}

/// Tests that the cache-line section reports one row per element and that
/// the number of boundary markers matches the tile's span across lines.
#[test]
fn cache_line_section_marks_each_crossing() {
    let inspector = TileInspector::new(Config::default());
    let matrix = Matrix::new(8);
    let tile = Tile::load(&matrix, 2, 3, 4).unwrap();

    let mut out = Vec::new();
    inspector.visualize_cache_lines(&mut out, &tile).unwrap();
    let rendered = String::from_utf8(out).unwrap();

    let rows = rendered.matches("] line ").count();
    assert_eq!(rows, 16);

    // 16 four-byte elements span 64 bytes: zero boundaries if the base is
    // line-aligned, one otherwise.
    let markers = rendered.matches("cache line boundary").count();
    let aligned = tile.base_addr().val() % 64 == 0;
    assert_eq!(markers, usize::from(!aligned));
}

/// Tests that a failing sink surfaces as a render error from the full run.
#[test]
fn sink_failure_propagates_as_render_error() {
    let inspector = TileInspector::new(Config::default());
    let err = inspector.run(&mut FailingSink).unwrap_err();
    assert!(matches!(err, SimError::Render(_)));
}
