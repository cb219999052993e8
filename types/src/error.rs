//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while constructing or decoding the shared types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallotError {
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("unknown workflow phase code {0}")]
    UnknownPhase(u8),
}
