use crate::digest::compute;
use crate::error::{Result, VersioningError};
use std::fs;
use std::path::Path;

/// Computes the SHA-256 digest of a file's raw content.
///
/// The whole file is read into memory first; the engine only hashes fully
/// materialized buffers.
///
/// # Arguments
///
/// * `path` - The file to hash.
///
/// # Returns
///
/// * `Ok(String)` - The 64-character hexadecimal digest.
/// * `Err(VersioningError)` - If the file cannot be read.
pub fn compute_file_digest(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|e| VersioningError::from_io(path, e))?;
    Ok(compute(&content))
}
