//! # Trellis Ternary
//!
//! Balanced-ternary primitives for the Trellis ledger toolkit: trits,
//! tryte strings, and the 243-trit [`Hash`] value type.
//!
//! This crate contains no I/O and no hashing. It is pure computation over
//! the ternary data model; the hashing substrate itself lives in
//! `trellis-hash`.
//!
//! ## Key Types
//!
//! - [`Trit`] - a balanced-ternary digit in {-1, 0, 1}
//! - [`Hash`] - exactly 243 trits, displayed as 81 trytes
//! - [`TernaryError`] - validation and conversion failures

pub mod error;
pub mod hash;
pub mod trits;
pub mod trytes;

pub use error::TernaryError;
pub use hash::Hash;
pub use trits::{int_to_trits, trailing_zeros, trits_to_int, validate_trits, Trit, HASH_TRITS};
pub use trytes::{
    pad_trytes, trits_to_trytes, trytes_to_trits, validate_trytes, HASH_TRYTES, TRYTE_ALPHABET,
};
