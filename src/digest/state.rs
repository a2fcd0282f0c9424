use super::constants::INITIAL_STATE;

/// The eight-word running digest accumulator.
///
/// A `State` is a value: processing a block produces a new `State` rather than
/// mutating a shared one, so two digest computations can never observe each
/// other's intermediate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State([u32; 8]);

impl State {
    /// The standard initial hash value every computation starts from.
    pub const fn initial() -> Self {
        State(INITIAL_STATE)
    }

    /// Wraps raw words, e.g. to resume from a known intermediate value in tests.
    pub const fn from_words(words: [u32; 8]) -> Self {
        State(words)
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Adds the working variables left by the last round into this state, word by word, modulo 2^32.
    pub fn fold(self, vars: WorkingVars) -> Self {
        let [h0, h1, h2, h3, h4, h5, h6, h7] = self.0;
        State([
            h0.wrapping_add(vars.a),
            h1.wrapping_add(vars.b),
            h2.wrapping_add(vars.c),
            h3.wrapping_add(vars.d),
            h4.wrapping_add(vars.e),
            h5.wrapping_add(vars.f),
            h6.wrapping_add(vars.g),
            h7.wrapping_add(vars.h),
        ])
    }

    /// Serializes the state as 32 bytes, most significant word first.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Encodes the state as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl Default for State {
    fn default() -> Self {
        State::initial()
    }
}

/// The working variables `a` through `h` of one block's compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingVars {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl From<State> for WorkingVars {
    fn from(state: State) -> Self {
        let [a, b, c, d, e, f, g, h] = state.0;
        WorkingVars { a, b, c, d, e, f, g, h }
    }
}
