//! Fixed-point money representation.
//!
//! Amounts are stored as integer cents so that repeated cart additions never
//! accumulate floating-point drift. Decimal dollars exist only at the
//! boundary: catalog files carry prices like `349.99`, and display code
//! formats to two decimal places.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors converting a decimal amount into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Prices are non-negative; a negative amount is a data error.
    #[error("negative amount: {0}")]
    Negative(Decimal),

    /// The amount has sub-cent precision and cannot be represented.
    #[error("sub-cent precision in amount: {0}")]
    SubCent(Decimal),

    /// The amount does not fit in 64-bit cents.
    #[error("amount out of range: {0}")]
    OutOfRange(Decimal),
}

/// A monetary amount in integer cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(0);

    /// Create an amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Convert a decimal dollar amount (e.g. `349.99`) into cents.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError`] for negative amounts, sub-cent precision, or
    /// amounts that overflow 64-bit cents.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(MoneyError::OutOfRange(amount))?;
        if !cents.fract().is_zero() {
            return Err(MoneyError::SubCent(amount));
        }
        cents
            .trunc()
            .to_i64()
            .map(Self)
            .ok_or(MoneyError::OutOfRange(amount))
    }

    /// The amount as decimal dollars.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Add two amounts, saturating at the representable range.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiply a unit price by a quantity, saturating at the range.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.as_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.as_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
        Self::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_from_decimal_whole_cents() {
        assert_eq!(Money::from_decimal(dec!(349.99)), Ok(Money::from_cents(34999)));
        assert_eq!(Money::from_decimal(dec!(10)), Ok(Money::from_cents(1000)));
        assert_eq!(Money::from_decimal(dec!(0)), Ok(Money::ZERO));
    }

    #[test]
    fn test_from_decimal_rejects_negative_and_sub_cent() {
        assert_eq!(
            Money::from_decimal(dec!(-1.50)),
            Err(MoneyError::Negative(dec!(-1.50)))
        );
        assert_eq!(
            Money::from_decimal(dec!(0.999)),
            Err(MoneyError::SubCent(dec!(0.999)))
        );
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Money::from_cents(1000).to_string(), "$10.00");
        assert_eq!(Money::from_cents(34999).to_string(), "$349.99");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic_in_cents() {
        let unit = Money::from_cents(1999);
        assert_eq!(unit.times(3), Money::from_cents(5997));
        assert_eq!(
            unit.saturating_add(Money::from_cents(1)),
            Money::from_cents(2000)
        );
    }

    #[test]
    fn test_serde_accepts_catalog_numbers() {
        // products.json carries bare numbers
        let price: Money = serde_json::from_str("349.99").expect("number");
        assert_eq!(price, Money::from_cents(34999));
        // and our own serialized form round-trips
        let json = serde_json::to_string(&price).expect("serialize");
        let back: Money = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, price);
    }
}
