//! Batched Curl: many sponge lanes per machine word.
//!
//! The state is two bit planes per trit position with one bit per lane:
//! the `l` bit is cleared when the lane's trit is 1, the `h` bit is
//! cleared when it is -1, and both stay set for 0. The reset state is all
//! ones. Under this encoding the round function reduces to word-wide
//! AND/OR/XOR/NOT.
//!
//! Instead of walking the stride-364 index table, each round reads its
//! second operand at a rotation offset that advances by a factor of 364
//! per round. After the 81 rounds the trit order is scrambled by
//! 364⁸¹ mod 729 = 244, so the final reorder step writes the value found
//! at position `(244·k) mod 729` back to logical index `k`. The scalar
//! transform is the correctness oracle for all of this.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not, Shl, Shr};

use trellis_ternary::trits::Trit;

use crate::error::Error;

use super::{HASH_LENGTH, STATE_LENGTH};

/// Number of rounds; the batched engine always runs Curl-P-81.
const NUM_ROUNDS: usize = 81;

/// 364⁸¹ mod 729: the accumulated scrambling undone by the reorder step.
const REORDER_STEP: usize = 244;

/// A machine word holding one bit per hash lane.
pub trait LaneWord:
    Copy
    + Eq
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of lanes the word carries.
    const LANES: usize;
    /// All bits clear.
    const ZERO: Self;
    /// All bits set.
    const ONES: Self;
    /// Only the lowest bit set.
    const ONE: Self;
}

impl LaneWord for u64 {
    const LANES: usize = 64;
    const ZERO: Self = 0;
    const ONES: Self = u64::MAX;
    const ONE: Self = 1;
}

impl LaneWord for u128 {
    const LANES: usize = 128;
    const ZERO: Self = 0;
    const ONES: Self = u128::MAX;
    const ONE: Self = 1;
}

/// A batched Curl-P-81 computing up to [`LaneWord::LANES`] independent
/// hashes at once.
#[derive(Clone)]
pub struct BatchedCurl<W: LaneWord = u64> {
    l: [W; STATE_LENGTH],
    h: [W; STATE_LENGTH],
}

/// Batched Curl over `u64` lanes (the `Batched64` strategy).
pub type BatchedCurl64 = BatchedCurl<u64>;

/// Batched Curl over `u128` lanes (the `BatchedWide` strategy).
pub type BatchedCurlWide = BatchedCurl<u128>;

impl<W: LaneWord> BatchedCurl<W> {
    /// Maximum number of lanes per batch.
    pub const MAX_BATCH: usize = W::LANES;

    /// Creates a batched sponge with every lane in the zero state.
    pub fn new() -> Self {
        Self {
            l: [W::ONES; STATE_LENGTH],
            h: [W::ONES; STATE_LENGTH],
        }
    }

    /// Resets every lane to the zero state.
    pub fn reset(&mut self) {
        self.l = [W::ONES; STATE_LENGTH];
        self.h = [W::ONES; STATE_LENGTH];
    }

    /// Absorbs one input per lane.
    ///
    /// All inputs must share one length, a positive multiple of 243 trits;
    /// the batch must hold between 1 and [`Self::MAX_BATCH`] lanes.
    pub fn absorb(&mut self, inputs: &[&[Trit]]) -> Result<(), Error> {
        if inputs.is_empty() || inputs.len() > W::LANES {
            return Err(Error::InvalidBatchSize(inputs.len()));
        }
        let trit_count = inputs[0].len();
        if trit_count == 0 || trit_count % HASH_LENGTH != 0 {
            return Err(Error::InvalidTritsLength(trit_count));
        }
        for lane in inputs {
            if lane.len() != trit_count {
                return Err(Error::InvalidTritsLength(lane.len()));
            }
        }

        for offset in (0..trit_count).step_by(HASH_LENGTH) {
            // Every chunk overwrites the whole rate across all lanes.
            for i in 0..HASH_LENGTH {
                self.l[i] = W::ONES;
                self.h[i] = W::ONES;
            }
            for (idx, lane) in inputs.iter().enumerate() {
                self.set_lane(&lane[offset..offset + HASH_LENGTH], idx as u32);
            }
            self.transform();
        }
        Ok(())
    }

    /// Squeezes `trit_count` trits out of each of the first `lanes` lanes.
    pub fn squeeze(&mut self, lanes: usize, trit_count: usize) -> Result<Vec<Vec<Trit>>, Error> {
        if lanes == 0 || lanes > W::LANES {
            return Err(Error::InvalidBatchSize(lanes));
        }
        if trit_count == 0 || trit_count % HASH_LENGTH != 0 {
            return Err(Error::InvalidTritsLength(trit_count));
        }
        let mut out = vec![vec![0 as Trit; trit_count]; lanes];
        for block in 0..trit_count / HASH_LENGTH {
            let range = block * HASH_LENGTH..(block + 1) * HASH_LENGTH;
            for (idx, lane) in out.iter_mut().enumerate() {
                self.get_lane(&mut lane[range.clone()], idx as u32);
            }
            self.transform();
        }
        Ok(out)
    }

    /// Writes a 243-trit chunk into lane `idx` of the rate.
    fn set_lane(&mut self, trits: &[Trit], idx: u32) {
        debug_assert_eq!(trits.len(), HASH_LENGTH);
        let mask = !(W::ONE << idx);
        for (i, &trit) in trits.iter().enumerate() {
            match trit {
                1 => self.l[i] &= mask,
                -1 => self.h[i] &= mask,
                _ => {}
            }
        }
    }

    /// Reads lane `idx` of the rate into `trits`.
    fn get_lane(&self, trits: &mut [Trit], idx: u32) {
        for (i, trit) in trits.iter_mut().enumerate() {
            *trit = if (self.l[i] >> idx) & W::ONE == W::ZERO {
                1
            } else if (self.h[i] >> idx) & W::ONE == W::ZERO {
                -1
            } else {
                0
            };
        }
    }

    /// Runs the 81 bit-sliced rounds followed by the reorder step.
    fn transform(&mut self) {
        let mut a = (self.l, self.h);
        let mut b = ([W::ZERO; STATE_LENGTH], [W::ZERO; STATE_LENGTH]);
        let (mut cur, mut nxt) = (&mut a, &mut b);

        let mut offset = 364usize;
        for _ in 0..NUM_ROUNDS {
            for i in 0..STATE_LENGTH {
                let j = (i + offset) % STATE_LENGTH;
                let (al, ah) = (cur.0[i], cur.1[i]);
                let (bl, bh) = (cur.0[j], cur.1[j]);
                let delta = (al | !bh) & (bl ^ ah);
                nxt.0[i] = !delta;
                nxt.1[i] = (al ^ bh) | delta;
            }
            core::mem::swap(&mut cur, &mut nxt);
            offset = offset * 364 % STATE_LENGTH;
        }

        for (k, (l, h)) in self.l.iter_mut().zip(self.h.iter_mut()).enumerate() {
            let src = REORDER_STEP * k % STATE_LENGTH;
            *l = cur.0[src];
            *h = cur.1[src];
        }
    }
}

impl<W: LaneWord> Default for BatchedCurl<W> {
    fn default() -> Self {
        Self::new()
    }
}
