//! Error types for the hashing substrate.

use thiserror::Error;
use trellis_ternary::TernaryError;

/// Errors returned by the sponge functions and the ternary-binary codec.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A trit count that is not a positive multiple of the 243-trit block,
    /// or a codec input that is not exactly 243 trits.
    #[error("invalid trits length: {0}")]
    InvalidTritsLength(usize),

    /// A codec input that is not exactly 48 bytes.
    #[error("invalid bytes length: {0}")]
    InvalidBytesLength(usize),

    /// A digit outside {-1, 0, 1} reaching a validation boundary.
    #[error("invalid trit value: {0}")]
    InvalidTritValue(i8),

    /// A batch with zero lanes or more lanes than the transform carries.
    #[error("invalid batch size: {0}")]
    InvalidBatchSize(usize),

    /// An invalid tryte character in textual input.
    #[error("invalid tryte character: {0:?}")]
    InvalidTryte(char),
}

impl From<TernaryError> for Error {
    fn from(e: TernaryError) -> Self {
        match e {
            TernaryError::InvalidTrit(t) => Error::InvalidTritValue(t),
            TernaryError::InvalidTryte(c) => Error::InvalidTryte(c),
            TernaryError::InvalidTritsLength(n) => Error::InvalidTritsLength(n),
        }
    }
}
