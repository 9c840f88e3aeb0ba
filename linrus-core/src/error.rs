//! Error types shared by every linrus crate.

use thiserror::Error;

/// Result type alias using linrus' [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the kernels and drivers.
///
/// Numerical singularity is not an error: factorizations report it through
/// their `info` return value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are inconsistent (non-square triangular factor,
    /// mismatched inner dimension, short pivot array, ...).
    #[error("invalid argument in {routine}: {reason}")]
    InvalidArgument {
        /// The routine that rejected its arguments
        routine: &'static str,
        /// What was wrong with them
        reason: String,
    },

    /// The routine exists only as an interface and has no implementation yet.
    #[error("{routine} is not implemented")]
    NotImplemented {
        /// The stubbed routine
        routine: &'static str,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(routine: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            routine,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::NotImplemented`].
    pub fn not_implemented(routine: &'static str) -> Self {
        Error::NotImplemented { routine }
    }
}
