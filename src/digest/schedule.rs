use super::constants::{BLOCK_LEN, ROUNDS};
use super::primitives::{small_sigma0, small_sigma1};

/// Expands one 64-byte block into the 64-word message schedule.
///
/// Words 0 through 15 are the block's big-endian 32-bit groups. Every later
/// word is derived from four earlier ones:
/// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]`, modulo 2^32.
///
/// # Arguments
///
/// * `block` - One block of the padded message.
///
/// # Returns
///
/// The message schedule consumed by the 64 compression rounds.
///
/// # Examples
///
/// ```rust
/// use file_versioning::digest::expand_schedule;
///
/// let schedule = expand_schedule(&[0u8; 64]);
/// assert!(schedule.iter().all(|&w| w == 0));
/// ```
pub fn expand_schedule(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for t in 16..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}
