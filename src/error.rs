//! Errors produced by the math types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors related to vector and quaternion arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A value with a magnitude of exactly zero was used as a divisor,
    /// e.g. when normalising the zero vector.
    #[error("cannot divide by zero magnitude in {operation}")]
    ZeroMagnitude { operation: &'static str },
}

impl Error {
    /// Builds a [`ZeroMagnitude`](Self::ZeroMagnitude) error and records it
    /// as a `tracing` event.
    pub(crate) fn zero_magnitude(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected division by zero magnitude");
        Self::ZeroMagnitude { operation }
    }
}
