//! File Versioning Library
//!
//! This library provides a from-scratch SHA-256 digest engine and a flat
//! snapshot store that keeps timestamped, digest-named copies of files.
//!

pub mod digest;
pub mod error;
pub mod menu;
pub mod snapshot;
pub mod utils;
