//! Exact currency amounts

use crate::core::error::CatalogError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Cents precision
const SCALE: u32 = 2;

/// A non-negative amount of money, always held at two decimal places.
///
/// Backed by [`Decimal`], so seed prices like `0.285` round half away from
/// zero to `0.29` instead of drifting through a float. Deserializes from a
/// number or a string; serializes as a decimal string (`"14.99"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED).rescaled()
    }

    /// Round `amount` to the cent; negative amounts are rejected
    pub fn new(amount: Decimal) -> Result<Self, CatalogError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CatalogError::InvalidPrice {
                value: amount.to_string(),
            });
        }
        let rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        Ok(Self(rounded).rescaled())
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    fn rescaled(mut self) -> Self {
        self.0.rescale(SCALE);
        self
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CatalogError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.rescaled().0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0).rescaled()
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * Decimal::from(rhs)).rescaled()
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
