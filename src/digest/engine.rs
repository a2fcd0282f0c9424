use super::compress::compress;
use super::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use super::state::State;

/// Pads a message to a whole number of 64-byte blocks.
///
/// Appends the `0x80` marker, the minimum run of zero bytes that leaves the
/// length congruent to 56 modulo 64, and finally the original length in bits
/// as a big-endian `u64`.
///
/// # Arguments
///
/// * `message` - The raw input bytes.
///
/// # Returns
///
/// A new buffer whose length is a positive multiple of 64 and at least nine
/// bytes longer than `message`.
///
/// # Examples
///
/// ```rust
/// use file_versioning::digest::pad;
///
/// assert_eq!(pad(b"").len(), 64);
/// assert_eq!(pad(&[0u8; 55]).len(), 64);
/// assert_eq!(pad(&[0u8; 56]).len(), 128);
/// ```
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let zeros = (BLOCK_LEN - (message.len() + 1 + LENGTH_FIELD_LEN) % BLOCK_LEN) % BLOCK_LEN;

    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + LENGTH_FIELD_LEN);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}

/// Computes the raw 32-byte SHA-256 digest of a message.
///
/// Every call starts from [`State::initial`] and folds the padded blocks
/// through [`compress`], so no state survives between calls.
///
/// # Arguments
///
/// * `message` - The complete input; any length, including empty.
///
/// # Returns
///
/// The final state serialized as 32 big-endian bytes.
pub fn digest(message: &[u8]) -> [u8; 32] {
    final_state(message).to_bytes()
}

/// Folds every padded block of `message` into a fresh initial state.
fn final_state(message: &[u8]) -> State {
    pad(message)
        .chunks_exact(BLOCK_LEN)
        .fold(State::initial(), |state, chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            compress(state, &block)
        })
}

/// Computes the SHA-256 digest of a message as lowercase hexadecimal.
///
/// This is the entry point used by the snapshot store. It never fails: every
/// byte sequence is valid input and all arithmetic wraps modulo 2^32.
///
/// # Arguments
///
/// * `message` - The complete input bytes.
///
/// # Returns
///
/// A 64-character lowercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use file_versioning::digest::compute;
///
/// assert_eq!(
///     compute(b"abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn compute(message: &[u8]) -> String {
    final_state(message).to_hex()
}
