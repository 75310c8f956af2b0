//! The sponge capability surface shared by Curl and Kerl.

use trellis_ternary::trits::Trit;

use crate::curl::{Curl, CurlRounds};
use crate::error::Error;
use crate::kerl::Kerl;

/// An absorb/squeeze hashing session.
///
/// A sponge owns its state exclusively: a single session is not safe for
/// concurrent use, while independent sessions never share mutable state
/// and may run on separate threads freely.
pub trait Sponge: Send {
    /// Feeds trits into the sponge.
    fn absorb(&mut self, trits: &[Trit]) -> Result<(), Error>;

    /// Extracts `trit_count` trits, a positive multiple of 243.
    fn squeeze(&mut self, trit_count: usize) -> Result<Vec<Trit>, Error>;

    /// Returns the sponge to its initial state.
    fn reset(&mut self);

    /// Snapshots the current session.
    fn duplicate(&self) -> Box<dyn Sponge>;
}

/// The available sponge constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpongeKind {
    /// Curl with 27 rounds.
    CurlP27,
    /// Curl with 81 rounds.
    CurlP81,
    /// The Keccak-384 adapter.
    Kerl,
}

/// Creates a fresh sponge session of the given kind.
pub fn new_sponge(kind: SpongeKind) -> Box<dyn Sponge> {
    match kind {
        SpongeKind::CurlP27 => Box::new(Curl::new(CurlRounds::P27)),
        SpongeKind::CurlP81 => Box::new(Curl::new(CurlRounds::P81)),
        SpongeKind::Kerl => Box::new(Kerl::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_kinds_are_distinct() {
        let input = vec![1 as Trit; 243];
        let mut outputs = Vec::new();
        for kind in [SpongeKind::CurlP27, SpongeKind::CurlP81, SpongeKind::Kerl] {
            let mut sponge = new_sponge(kind);
            sponge.absorb(&input).unwrap();
            outputs.push(sponge.squeeze(243).unwrap());
        }
        assert_ne!(outputs[0], outputs[1]);
        assert_ne!(outputs[1], outputs[2]);
        assert_ne!(outputs[0], outputs[2]);
    }

    #[test]
    fn test_factory_sessions_are_independent() {
        let input = vec![-1 as Trit; 243];
        let mut a = new_sponge(SpongeKind::CurlP81);
        let mut b = new_sponge(SpongeKind::CurlP81);
        a.absorb(&input).unwrap();
        b.absorb(&input).unwrap();
        assert_eq!(a.squeeze(243).unwrap(), b.squeeze(243).unwrap());
    }
}
