//! # SHA-256 Digest Engine
//!
//! This module implements SHA-256 from first principles: message padding, block
//! decomposition, message schedule expansion and the 64-round compression
//! function. The computation is a pure pipeline:
//!
//! `raw bytes → pad → 64-byte blocks → schedule → compress (fold over blocks) → hex digest`
//!
//! ## Usage
//!
//! The main entry point is [`compute`], which takes the complete message and
//! returns a 64-character lowercase hexadecimal digest. Each call starts from a
//! fresh [`State`]; there is no hasher object to reset or reuse.
//!
//! ## Submodules
//!
//! - **constants**: Initial hash value and round constant tables.
//! - **primitives**: Rotations, `Ch`, `Maj` and the four sigma functions.
//! - **schedule**: Expansion of a block into its 64-word message schedule.
//! - **state**: The eight-word accumulator and the working variables.
//! - **compress**: The round step function and per-block compression.
//! - **engine**: Padding and the public digest functions.

mod compress;
mod constants;
mod engine;
mod primitives;
mod schedule;
mod state;

pub use compress::{compress, round};
pub use constants::{BLOCK_LEN, INITIAL_STATE, ROUNDS, ROUND_CONSTANTS};
pub use engine::{compute, digest, pad};
pub use schedule::expand_schedule;
pub use state::{State, WorkingVars};
