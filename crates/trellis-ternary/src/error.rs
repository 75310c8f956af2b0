//! Error types for the ternary data model.

use thiserror::Error;

/// Errors produced when validating or converting ternary data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TernaryError {
    /// A digit outside {-1, 0, 1}.
    #[error("invalid trit value: {0}")]
    InvalidTrit(i8),

    /// A character outside the tryte alphabet `9A-Z`.
    #[error("invalid tryte character: {0:?}")]
    InvalidTryte(char),

    /// A trit sequence whose length does not fit the requested conversion.
    #[error("invalid trits length: {0}")]
    InvalidTritsLength(usize),
}
