//! Bit-level mixing functions of the SHA-256 round and message schedule.
//!
//! All of them operate on 32-bit words; rotations and shifts never lose the
//! word width, and no function here can overflow.

/// 32-bit right rotation.
#[inline]
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// `Ch`: for each bit, picks `y` where `x` is set and `z` where it is clear.
#[inline]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// `Maj`: for each bit, the value held by at least two of the three inputs.
#[inline]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// `Σ0`, applied to working variable `a` in every round.
#[inline]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// `Σ1`, applied to working variable `e` in every round.
#[inline]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// `σ0`, used by the message schedule on `W[t-15]`.
#[inline]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// `σ1`, used by the message schedule on `W[t-2]`.
#[inline]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
