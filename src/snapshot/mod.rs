//! # Digest-Named File Snapshots
//!
//! This module keeps whole-file snapshots in a `.versions` directory next to
//! the tracked files. Committing a file copies it under a name built from the
//! local time, the SHA-256 digest of its content and its base name; rolling
//! back copies a named snapshot over the file again.
//!
//! ## Usage
//!
//! The entry point is [`VersionStore`], opened on a base directory. Its
//! `commit`, `rollback` and `update_file` methods drive the whole workflow.
//!
//! ## Submodules
//!
//! - **store**: The `VersionStore` and its file operations.
//! - **types**: Snapshot names and the `Snapshot` returned by a commit.

mod store;
mod types;

pub use store::{VersionStore, VERSION_DIR_NAME};
pub use types::{Snapshot, SnapshotName, TIMESTAMP_FORMAT};
