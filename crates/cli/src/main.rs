//! Shared-memory tiling simulator CLI.
//!
//! This binary runs the single reference demonstration: an 8×8 generator
//! matrix, a 4×4 tile loaded at (2, 3), a 64-byte cache line, and 4-byte
//! elements. There are no functional parameters; the geometry and tile
//! coordinates are compiled-in defaults, matching the teaching scenario the
//! output narrates. Set `RUST_LOG=debug` to see per-step trace events.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tilesim_core::{Config, TileInspector};

#[derive(Parser, Debug)]
#[command(
    name = "tilesim",
    version,
    about = "Shared-memory tiling and cache-line teaching simulator",
    long_about = "Loads a fixed tile from a deterministic matrix into a local buffer, then \
                  prints the tile, its per-element byte addresses, its cache-line membership, \
                  two reference reductions, three simulated warp-reuse passes, and a \
                  synchronous \"async\" copy.\n\nAll parameters are compiled-in constants; \
                  the run is fully deterministic apart from the buffer's base address."
)]
struct Cli {
    /// Exit immediately instead of waiting for a keypress.
    #[arg(long)]
    no_pause: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let inspector = TileInspector::new(Config::default());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = inspector.run(&mut out) {
        error!(%err, "demonstration run failed");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    drop(out);

    if !cli.no_pause {
        if let Err(err) = wait_for_enter() {
            error!(%err, "stdin unavailable, exiting without pause");
        }
    }

    ExitCode::SUCCESS
}

/// Blocks until the user presses Enter, per the reference demo's exit flow.
fn wait_for_enter() -> io::Result<()> {
    let mut out = io::stdout();
    writeln!(out, "Press Enter to exit.")?;
    out.flush()?;
    let mut line = String::new();
    let _bytes = io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
