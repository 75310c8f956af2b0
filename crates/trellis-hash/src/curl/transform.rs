//! The scalar Curl transform and the transform strategy probe.

use trellis_ternary::trits::Trit;

use super::STATE_LENGTH;

/// The ternary round function as a lookup table, indexed by `a + 4b + 5`
/// for the trit pair `(a, b)`. The `2` entries are unreachable padding.
pub(crate) const TRUTH_TABLE: [i8; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];

/// Read offsets for every state position: `INDICES[i] = (364 * i) % 729`.
/// Position `i` of a round combines `INDICES[i]` and `INDICES[i + 1]`.
pub(crate) const INDICES: [usize; STATE_LENGTH + 1] = build_indices();

const fn build_indices() -> [usize; STATE_LENGTH + 1] {
    let mut indices = [0usize; STATE_LENGTH + 1];
    let mut i = 0;
    while i < STATE_LENGTH {
        indices[i + 1] = (indices[i] + 364) % STATE_LENGTH;
        i += 1;
    }
    indices
}

/// The available transform implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// The per-trit reference implementation. Always available; the
    /// correctness oracle for the batched variants.
    Scalar,
    /// Two-bit-plane transform over 64 `u64` lanes.
    Batched64,
    /// Two-bit-plane transform over 128 `u128` lanes.
    BatchedWide,
}

/// Picks the widest transform for the compilation target.
///
/// Pure: the answer depends only on compile-time target facts, so it can
/// be evaluated once and cached by the caller.
pub const fn preferred_transform() -> TransformKind {
    if cfg!(target_feature = "avx2") {
        TransformKind::BatchedWide
    } else if cfg!(target_pointer_width = "64") {
        TransformKind::Batched64
    } else {
        TransformKind::Scalar
    }
}

/// Applies `rounds` rounds of the Curl permutation to `state`.
///
/// Double-buffered: every round reads only the previous round's values.
pub(crate) fn transform(state: &mut [Trit; STATE_LENGTH], rounds: usize) {
    let mut prev = [0 as Trit; STATE_LENGTH];
    for _ in 0..rounds {
        prev.copy_from_slice(state);
        for i in 0..STATE_LENGTH {
            let a = prev[INDICES[i]];
            let b = prev[INDICES[i + 1]];
            state[i] = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
        }
    }
}
