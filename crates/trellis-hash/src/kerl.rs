//! The Kerl sponge: Keccak-384 behind the trinary interface.

use sha3::{Digest, Keccak384};

use trellis_ternary::trits::Trit;

use crate::bigint::BYTE_COUNT;
use crate::codec::{bytes_to_trits, trits_to_bytes};
use crate::curl::HASH_LENGTH;
use crate::error::Error;
use crate::sponge::Sponge;

/// A Kerl sponge session.
///
/// Absorbing encodes each 243-trit chunk to 48 bytes and feeds them to
/// Keccak-384; squeezing decodes the digest back to trits. Between
/// squeezed blocks the bitwise complement of the digest is written into
/// the reset hash — successive blocks are domain-separated this way, and
/// the step is part of the network's hash definition, so it must be
/// reproduced exactly.
#[derive(Clone, Default)]
pub struct Kerl {
    keccak: Keccak384,
}

impl Kerl {
    /// Creates an empty Kerl sponge.
    pub fn new() -> Self {
        Self {
            keccak: Keccak384::new(),
        }
    }
}

impl Sponge for Kerl {
    fn absorb(&mut self, trits: &[Trit]) -> Result<(), Error> {
        if trits.is_empty() || trits.len() % HASH_LENGTH != 0 {
            return Err(Error::InvalidTritsLength(trits.len()));
        }
        for chunk in trits.chunks(HASH_LENGTH) {
            let bytes = trits_to_bytes(chunk)?;
            self.keccak.update(bytes);
        }
        Ok(())
    }

    fn squeeze(&mut self, trit_count: usize) -> Result<Vec<Trit>, Error> {
        if trit_count == 0 || trit_count % HASH_LENGTH != 0 {
            return Err(Error::InvalidTritsLength(trit_count));
        }
        let mut out = Vec::with_capacity(trit_count);
        for _ in 0..trit_count / HASH_LENGTH {
            let mut digest = [0u8; BYTE_COUNT];
            digest.copy_from_slice(&self.keccak.finalize_reset());
            out.extend_from_slice(&bytes_to_trits(&digest)?);
            for byte in digest.iter_mut() {
                *byte = !*byte;
            }
            self.keccak.update(digest);
        }
        Ok(out)
    }

    fn reset(&mut self) {
        self.keccak = Keccak384::new();
    }

    fn duplicate(&self) -> Box<dyn Sponge> {
        Box::new(self.clone())
    }
}
