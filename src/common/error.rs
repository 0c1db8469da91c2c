//! Error types for PagingSim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in PagingSim.
///
/// Every policy operation is total once a policy exists, so the taxonomy is
/// small: configuration mistakes and driver misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A policy was constructed with zero frames.
    #[error("Invalid capacity {0}: a cache needs at least one frame")]
    InvalidCapacity(usize),

    /// The driver was asked to step after the last request was consumed.
    #[error("Request sequence exhausted at position {position} of {len}")]
    SequenceExhausted { position: usize, len: usize },

    /// Rewind requested with an empty history.
    #[error("Nothing to rewind: history is empty")]
    NothingToRewind,

    /// Algorithm name did not match any known policy.
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// Simulation configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
