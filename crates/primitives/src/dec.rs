//! Deterministic fixed-point decimal used for exchange rates and their bounds.
//!
//! A [`Dec`] is an unsigned 256-bit integer interpreted with [`DEC_PRECISION`] implied decimal
//! places. Division is carried out at twice the precision and then rounded half-to-even back to
//! [`DEC_PRECISION`] places, so every replica computing the same ratio stores byte-identical
//! values.

use std::{fmt, str::FromStr};

use borsh::{BorshDeserialize, BorshSerialize};
use ethnum::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{constants::DEC_PRECISION, errors::DecParseError};

/// `10^18`, the raw representation of one.
const ONE_RAW: U256 = U256::new(10u128.pow(DEC_PRECISION));

/// `10^36`, the scale used for intermediate quotients.
const DOUBLE_PRECISION: U256 = U256::new(10u128.pow(2 * DEC_PRECISION));

/// Half of [`ONE_RAW`], the rounding midpoint.
const HALF_RAW: U256 = U256::new(10u128.pow(DEC_PRECISION) / 2);

/// An unsigned fixed-point decimal with 18 decimal places.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(U256);

impl Dec {
    /// The value `0`.
    pub const fn zero() -> Self {
        Self(U256::ZERO)
    }

    /// The value `1`.
    pub const fn one() -> Self {
        Self(ONE_RAW)
    }

    /// Creates a decimal from an integer.
    pub fn from_int(value: u128) -> Self {
        // u128::MAX * 10^18 stays well below 2^256.
        Self(U256::new(value) * ONE_RAW)
    }

    /// Creates a decimal from its raw, already-scaled representation.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw, scaled representation.
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }

    /// Computes `numerator / denominator`, or `None` if the denominator is zero.
    pub fn checked_from_ratio(numerator: u128, denominator: u128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }

        // numerator < 2^128 and 10^36 < 2^120, so the product cannot overflow.
        let quotient = U256::new(numerator) * DOUBLE_PRECISION / U256::new(denominator);

        Some(Self(chop_precision_and_round(quotient)))
    }

    /// Adds two decimals, returning `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Multiplies two decimals, returning `None` on overflow.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.0
            .checked_mul(other.0)
            .map(|product| Self(chop_precision_and_round(product)))
    }

    /// Divides by `other`, returning `None` on division by zero or overflow.
    pub fn checked_quo(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }

        let scaled = self.0.checked_mul(DOUBLE_PRECISION)?;

        Some(Self(chop_precision_and_round(scaled / other.0)))
    }

    /// Lossy conversion for reporting purposes only.
    ///
    /// Never feed the result back into state.
    pub fn to_f64_lossy(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

/// Removes [`DEC_PRECISION`] digits from the right of `value`, rounding half-to-even.
fn chop_precision_and_round(value: U256) -> U256 {
    let quotient = value / ONE_RAW;
    let remainder = value % ONE_RAW;

    if remainder < HALF_RAW {
        quotient
    } else if remainder > HALF_RAW {
        quotient + U256::ONE
    } else if quotient & U256::ONE == U256::ZERO {
        quotient
    } else {
        quotient + U256::ONE
    }
}

impl Default for Dec {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / ONE_RAW;
        let fraction = (self.0 % ONE_RAW).to_string();

        write!(f, "{integer}.{fraction:0>18}")
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dec({self})")
    }
}

impl FromStr for Dec {
    type Err = DecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecParseError::Empty);
        }

        let (integer, fraction) = match s.split_once('.') {
            Some((_, "")) => return Err(DecParseError::InvalidFormat(s.to_string())),
            Some((integer, fraction)) => (integer, fraction),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) {
            return Err(DecParseError::InvalidFormat(s.to_string()));
        }

        if fraction.len() > DEC_PRECISION as usize {
            return Err(DecParseError::TooPrecise(fraction.len()));
        }

        let scaled = format!("{integer}{fraction:0<18}");
        let raw = U256::from_str_radix(&scaled, 10)
            .map_err(|_| DecParseError::OutOfRange(s.to_string()))?;

        Ok(Self(raw))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl BorshSerialize for Dec {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.0.to_be_bytes())
    }
}

impl BorshDeserialize for Dec {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut bytes = [0u8; 32];
        reader.read_exact(&mut bytes)?;

        Ok(Self(U256::from_be_bytes(bytes)))
    }
}
