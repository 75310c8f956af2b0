//! # Trellis Hash
//!
//! The trinary hashing substrate of the Trellis ledger toolkit.
//!
//! Two sponge constructions share one absorb/squeeze surface:
//!
//! - [`Curl`]: the trit-native permutation sponge (Curl-P-27 and
//!   Curl-P-81), with a batched bit-sliced transform in [`curl::bct`].
//! - [`Kerl`]: the Keccak-384 adapter, bridging trit space and byte space
//!   through the exact 384-bit balanced-ternary codec in [`codec`].
//!
//! All operations are synchronous and deterministic; every lookup table is
//! a compile-time constant and state is confined to the session object the
//! caller owns. Downstream consumers are the one-time signature scheme
//! (subseeds, keys, digests, addresses), bundle hashing with its
//! proof-of-work trailing-zero check, and the 81-tryte address and
//! transaction codecs.

pub mod bigint;
pub mod codec;
pub mod curl;
pub mod error;
pub mod kerl;
pub mod sponge;

pub use curl::{Curl, CurlRounds, TransformKind, HASH_LENGTH, STATE_LENGTH};
pub use error::Error;
pub use kerl::Kerl;
pub use sponge::{new_sponge, Sponge, SpongeKind};
