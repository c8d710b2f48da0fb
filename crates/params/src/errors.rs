//! Errors for the protocol parameters.

use thiserror::Error;

/// Error while validating a set of [`Params`](crate::Params).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// A string parameter that must be set is empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A numeric parameter that must be positive is zero.
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}
