//! Trits: balanced-ternary digits and digit sequences.

use crate::error::TernaryError;

/// A balanced-ternary digit. Valid values are -1, 0 and 1.
pub type Trit = i8;

/// The ternary radix.
pub const RADIX: i8 = 3;

/// Number of trits per tryte.
pub const TRITS_PER_TRYTE: usize = 3;

/// Number of trits in a hash.
pub const HASH_TRITS: usize = 243;

/// Returns whether `t` is a valid balanced-ternary digit.
pub fn is_valid_trit(t: Trit) -> bool {
    (-1..=1).contains(&t)
}

/// Checks every digit of `trits`, reporting the first out-of-range value.
pub fn validate_trits(trits: &[Trit]) -> Result<(), TernaryError> {
    match trits.iter().find(|&&t| !is_valid_trit(t)) {
        Some(&t) => Err(TernaryError::InvalidTrit(t)),
        None => Ok(()),
    }
}

/// Interprets `trits` as a little-endian balanced-ternary integer.
///
/// The caller must keep the sequence short enough not to overflow an `i64`
/// (40 trits or fewer always fit).
pub fn trits_to_int(trits: &[Trit]) -> i64 {
    trits
        .iter()
        .rev()
        .fold(0, |acc, &t| acc * i64::from(RADIX) + i64::from(t))
}

/// Converts `value` to `len` little-endian trits.
///
/// Digits that do not fit into `len` trits are truncated.
pub fn int_to_trits(value: i64, len: usize) -> Vec<Trit> {
    let mut trits = vec![0; len];
    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    for trit in trits.iter_mut() {
        if abs == 0 {
            break;
        }
        let digit = ((abs + 1) % 3) as i8 - 1;
        *trit = if negative { -digit } else { digit };
        abs = (abs + 1) / 3;
    }
    trits
}

/// Number of zero trits at the end of `trits`.
///
/// Proof-of-work validity is expressed as a minimum trailing-zero count on
/// the transaction hash.
pub fn trailing_zeros(trits: &[Trit]) -> usize {
    trits.iter().rev().take_while(|&&t| t == 0).count()
}
