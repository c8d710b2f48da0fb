//! A denominated, non-negative token amount.

use std::fmt::Display;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::CoinError;

/// An amount of a single denomination.
///
/// Amounts are unsigned so a negative balance is unrepresentable; every operation that could leave
/// the valid range is checked.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Arbitrary,
)]
pub struct Coin {
    /// The denomination of the amount.
    pub denom: String,

    /// The amount in the smallest unit of the denomination.
    pub amount: u128,
}

impl Coin {
    /// Creates a new coin.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Creates a zero-valued coin of the given denomination.
    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, 0)
    }

    /// Returns `true` if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Adds `other` to this coin, failing on a denomination mismatch or overflow.
    pub fn checked_add(&self, other: &Coin) -> Result<Coin, CoinError> {
        self.ensure_same_denom(other)?;

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(CoinError::Overflow)?;

        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Subtracts `other` from this coin, failing on a denomination mismatch or if the result would
    /// be negative.
    pub fn checked_sub(&self, other: &Coin) -> Result<Coin, CoinError> {
        self.ensure_same_denom(other)?;

        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(CoinError::Insufficient {
                available: self.amount,
                requested: other.amount,
            })?;

        Ok(Coin::new(self.denom.clone(), amount))
    }

    fn ensure_same_denom(&self, other: &Coin) -> Result<(), CoinError> {
        if self.denom != other.denom {
            return Err(CoinError::DenomMismatch {
                left: self.denom.clone(),
                right: other.denom.clone(),
            });
        }

        Ok(())
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Coin::new("uatom", 10_000);
        let b = Coin::new("uatom", 2_500);

        assert_eq!(a.checked_add(&b).unwrap(), Coin::new("uatom", 12_500));
        assert_eq!(a.checked_sub(&b).unwrap(), Coin::new("uatom", 7_500));
        assert_eq!(
            b.checked_sub(&a).unwrap_err(),
            CoinError::Insufficient {
                available: 2_500,
                requested: 10_000
            }
        );
    }

    #[test]
    fn test_denom_mismatch() {
        let a = Coin::new("uatom", 1);
        let b = Coin::new("uosmo", 1);

        assert!(matches!(
            a.checked_add(&b),
            Err(CoinError::DenomMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let a = Coin::new("uatom", u128::MAX);

        assert_eq!(
            a.checked_add(&Coin::new("uatom", 1)).unwrap_err(),
            CoinError::Overflow
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::new("uatom", 42).to_string(), "42uatom");
    }
}
