//! # Utility Functions
//!
//! Helpers shared by the binary and library callers that sit next to the
//! digest engine rather than inside it.
//!
//! ## Submodules
//!
//! - **digest**: Digest calculation for files on disk.

mod digest;

pub use digest::compute_file_digest;
