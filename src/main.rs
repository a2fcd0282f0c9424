//! File Versioning: Digest-Named Snapshots of a Single File
//!
//! This application tracks one file and lets the user edit it, snapshot it and
//! roll it back from an interactive menu. Every snapshot is a plain copy in
//! `.versions/`, named after the commit time, the SHA-256 digest of the file
//! content and the file's base name.
//!
//! ## Design Overview
//! - **Digest**: SHA-256 is computed by the crate's own engine in the `digest` module.
//! - **Snapshots**: `snapshot::VersionStore` copies files into and out of `.versions/`.
//! - **Menu**: `menu::run_menu` drives the store from stdin/stdout.
//!
//! ## Dependencies
//! - **`log` and `env_logger`**: For structured logging instead of `println!`.
//! - **`clap`**: For parsing command-line arguments to configure the application.
//! - **`chrono`**: Timestamps embedded in snapshot names.
//! - **`anyhow`**: Error context for startup failures.
//!
//! ## Usage
//! 1. Configure the application using command-line arguments or environment variables:
//!    ```sh
//!    cargo run -- --base-dir ./workspace --file hello.txt
//!    ```
//!    or
//!    ```sh
//!    export BASE_DIR=./workspace
//!    export VERSIONED_FILE=hello.txt
//!    cargo run
//!    ```
//! 2. Logs go to stderr, controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    RUST_LOG=info cargo run
//!    ```

use anyhow::{Context, Result};
use clap::Parser;
use file_versioning::menu::run_menu;
use file_versioning::snapshot::VersionStore;
use file_versioning::utils::compute_file_digest;
use log::info;
use std::io;
use std::path::PathBuf;

/// Command-line arguments for configuring the versioning tool.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Directory that holds the tracked file and the `.versions` side-store.
  #[clap(long, env = "BASE_DIR", default_value = ".")]
  base_dir: PathBuf,

  /// Tracked file, relative to the base directory.
  #[clap(long, env = "VERSIONED_FILE", default_value = "hello.txt")]
  file: PathBuf,

  /// Content written to the tracked file when it does not exist yet.
  #[clap(long, env = "INITIAL_CONTENT", default_value = "Initial content")]
  initial_content: String,

  /// Overwrite the tracked file with the initial content even if it exists
  #[clap(long, action)]
  reset: bool,
}

/// Opens the store, prepares the tracked file and runs the interactive menu.
///
/// # Returns
/// - `Ok(())` when the user exits the menu.
/// - `Err(anyhow::Error)` if the side-store or tracked file cannot be set up,
///   or the terminal fails.
fn main() -> Result<()> {
  // Initialize logging
  env_logger::init();

  let args = Args::parse();
  info!("Starting file versioning in {}", args.base_dir.display());

  let store = VersionStore::new(&args.base_dir)
    .with_context(|| format!("Failed to open version store in {}", args.base_dir.display()))?;
  let file_path = store.base_directory().join(&args.file);

  if args.reset || !file_path.exists() {
    store
      .update_file(&file_path, &args.initial_content)
      .with_context(|| format!("Failed to write initial content to {}", file_path.display()))?;
    info!("Wrote initial content to {}", file_path.display());
  }

  let digest = compute_file_digest(&file_path)
    .with_context(|| format!("Failed to read {}", file_path.display()))?;
  info!("Tracking {} (current digest {})", file_path.display(), digest);

  let stdin = io::stdin();
  run_menu(&store, &file_path, stdin.lock(), io::stdout()).context("Terminal I/O failed")?;

  Ok(())
}
