use super::constants::{BLOCK_LEN, ROUND_CONSTANTS};
use super::primitives::{big_sigma0, big_sigma1, ch, maj};
use super::schedule::expand_schedule;
use super::state::{State, WorkingVars};

/// Runs one compression round and returns the shifted working variables.
///
/// # Arguments
///
/// * `vars` - Working variables before the round.
/// * `k` - The round constant `K[t]`.
/// * `w` - The message schedule word `W[t]`.
///
/// # Returns
///
/// The working variables after the round: every variable moves down one slot,
/// `e` absorbs `d + T1` and `a` becomes `T1 + T2`.
pub fn round(vars: WorkingVars, k: u32, w: u32) -> WorkingVars {
    let WorkingVars { a, b, c, d, e, f, g, h } = vars;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    WorkingVars {
        a: t1.wrapping_add(t2),
        b: a,
        c: b,
        d: c,
        e: d.wrapping_add(t1),
        f: e,
        g: f,
        h: g,
    }
}

/// Processes one block: expands its schedule, runs the 64 rounds and folds
/// the result into `state`.
///
/// # Arguments
///
/// * `state` - The accumulator after all previous blocks.
/// * `block` - The next 64-byte block of the padded message.
///
/// # Returns
///
/// The accumulator after this block.
pub fn compress(state: State, block: &[u8; BLOCK_LEN]) -> State {
    let schedule = expand_schedule(block);

    let vars = ROUND_CONSTANTS
        .iter()
        .zip(schedule.iter())
        .fold(WorkingVars::from(state), |vars, (&k, &w)| round(vars, k, w));

    state.fold(vars)
}
