//! The Curl sponge: a trit-native permutation hash.
//!
//! Curl keeps a 729-trit state, the first 243 trits of which form the
//! exposed rate. The permutation runs 27 or 81 rounds of a two-trit
//! lookup over a fixed stride-364 walk of the state. [`bct`] holds the
//! batched bit-sliced implementation of the same permutation.

pub mod bct;
mod transform;

pub use transform::{preferred_transform, TransformKind};

use trellis_ternary::trits::{Trit, HASH_TRITS};

use crate::error::Error;
use crate::sponge::Sponge;

/// Number of trits exposed per absorb/squeeze block (the sponge rate).
pub const HASH_LENGTH: usize = HASH_TRITS;

/// Total state size: the rate plus a hidden capacity twice its size.
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;

/// Round-count variants of the Curl permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurlRounds {
    /// Curl-P-27.
    P27 = 27,
    /// Curl-P-81, the variant behind transaction and bundle hashes.
    P81 = 81,
}

/// A Curl sponge session.
///
/// The state starts zeroed. Absorbing overwrites the rate chunk by chunk
/// (a trailing partial chunk overwrites only the positions it covers) and
/// transforms after every chunk; squeezing emits the rate and transforms
/// after every block.
#[derive(Clone)]
pub struct Curl {
    state: [Trit; STATE_LENGTH],
    rounds: CurlRounds,
}

impl Curl {
    /// Creates a sponge with the given round count.
    pub fn new(rounds: CurlRounds) -> Self {
        Self {
            state: [0; STATE_LENGTH],
            rounds,
        }
    }

    /// Creates a Curl-P-27 sponge.
    pub fn new_p27() -> Self {
        Self::new(CurlRounds::P27)
    }

    /// Creates a Curl-P-81 sponge.
    pub fn new_p81() -> Self {
        Self::new(CurlRounds::P81)
    }

    /// Copies the leading `out.len()` trits of the state into `out`.
    ///
    /// Proof-of-work searchers snapshot the mid-absorb state this way and
    /// resume from it with modified nonce trits.
    pub fn copy_state(&self, out: &mut [Trit]) {
        let n = out.len().min(STATE_LENGTH);
        out[..n].copy_from_slice(&self.state[..n]);
    }

    fn transform(&mut self) {
        transform::transform(&mut self.state, self.rounds as usize);
    }
}

impl Default for Curl {
    fn default() -> Self {
        Self::new_p81()
    }
}

impl Sponge for Curl {
    fn absorb(&mut self, trits: &[Trit]) -> Result<(), Error> {
        debug_assert!(trits.iter().all(|&t| (-1..=1).contains(&t)));
        // An empty absorb feeds a single zero trit; legacy network
        // behavior, preserved bit-for-bit.
        if trits.is_empty() {
            self.state[0] = 0;
            self.transform();
            return Ok(());
        }
        for chunk in trits.chunks(HASH_LENGTH) {
            self.state[..chunk.len()].copy_from_slice(chunk);
            self.transform();
        }
        Ok(())
    }

    fn squeeze(&mut self, trit_count: usize) -> Result<Vec<Trit>, Error> {
        if trit_count == 0 || trit_count % HASH_LENGTH != 0 {
            return Err(Error::InvalidTritsLength(trit_count));
        }
        let mut out = Vec::with_capacity(trit_count);
        for _ in 0..trit_count / HASH_LENGTH {
            out.extend_from_slice(&self.state[..HASH_LENGTH]);
            self.transform();
        }
        Ok(out)
    }

    fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    fn duplicate(&self) -> Box<dyn Sponge> {
        Box::new(self.clone())
    }
}
