//! Errors for the primitive types.

use thiserror::Error;

/// Error while operating on a [`Coin`](crate::coin::Coin).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// The two operands carry different denominations.
    #[error("denomination mismatch: {left} vs {right}")]
    DenomMismatch {
        /// The denomination of the left-hand operand.
        left: String,
        /// The denomination of the right-hand operand.
        right: String,
    },

    /// The operation would leave the representable range.
    #[error("amount overflow")]
    Overflow,

    /// The subtraction would produce a negative amount.
    #[error("insufficient amount: {available} < {requested}")]
    Insufficient {
        /// The amount available.
        available: u128,
        /// The amount requested.
        requested: u128,
    },
}

/// Error while parsing a [`Dec`](crate::dec::Dec) from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecParseError {
    /// The input was empty.
    #[error("empty decimal string")]
    Empty,

    /// The input contains something other than digits and a single decimal point.
    #[error("invalid decimal string: {0}")]
    InvalidFormat(String),

    /// More fractional digits than the supported precision.
    #[error("too many decimal places: {0}")]
    TooPrecise(usize),

    /// The value does not fit in 256 bits.
    #[error("decimal out of range: {0}")]
    OutOfRange(String),
}
