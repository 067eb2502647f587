//! Crate error type.

use thiserror::Error;

/// Errors reported by the prime engine.
///
/// There are only two failure modes: a caller-supplied value outside the
/// domain of the operation, and a sieve segment too large to allocate. Pure
/// computation has no transient failures, so nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The argument is outside the domain of the operation: zero passed to
    /// factorization, or a malformed factorization mapping.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The composite-marker segment for a sieve extension could not be
    /// allocated. The cache is left at its last valid state.
    #[error("cannot allocate sieve segment up to {bound}")]
    ResourceExhausted { bound: u64 },
}
