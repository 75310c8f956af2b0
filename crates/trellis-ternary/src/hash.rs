//! The 243-trit hash value.

use std::fmt;

use crate::error::TernaryError;
use crate::trits::{trailing_zeros, validate_trits, Trit, HASH_TRITS, TRITS_PER_TRYTE};
use crate::trytes::{tryte_char, trytes_to_trits};

/// A hash: exactly 243 trits, displayed as 81 trytes.
///
/// This is the externally meaningful unit of the hashing substrate; sponge
/// squeezes, addresses and bundle hashes are all `Hash`-sized.
#[derive(Clone, PartialEq, Eq)]
pub struct Hash([Trit; HASH_TRITS]);

impl Hash {
    /// The all-zero hash (81 `9`s).
    pub const NULL: Self = Self([0; HASH_TRITS]);

    /// Creates a hash from exactly 243 valid trits.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, TernaryError> {
        if trits.len() != HASH_TRITS {
            return Err(TernaryError::InvalidTritsLength(trits.len()));
        }
        validate_trits(trits)?;
        let mut inner = [0; HASH_TRITS];
        inner.copy_from_slice(trits);
        Ok(Self(inner))
    }

    /// Parses a hash from its 81-tryte textual form.
    pub fn from_trytes(trytes: &str) -> Result<Self, TernaryError> {
        Self::from_trits(&trytes_to_trits(trytes)?)
    }

    /// The raw trits.
    pub fn as_trits(&self) -> &[Trit; HASH_TRITS] {
        &self.0
    }

    /// The 81-tryte textual form.
    pub fn to_trytes(&self) -> String {
        self.to_string()
    }

    /// Number of zero trits at the end of the hash.
    ///
    /// Proof-of-work weight: a transaction hash is valid when this count
    /// reaches the network's minimum weight magnitude.
    pub fn trailing_zeros(&self) -> usize {
        trailing_zeros(&self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.chunks(TRITS_PER_TRYTE) {
            write!(f, "{}", tryte_char(chunk[0], chunk[1], chunk[2]))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_trytes()[..16])
    }
}

impl AsRef<[Trit]> for Hash {
    fn as_ref(&self) -> &[Trit] {
        &self.0
    }
}

impl From<[Trit; HASH_TRITS]> for Hash {
    fn from(trits: [Trit; HASH_TRITS]) -> Self {
        Self(trits)
    }
}
