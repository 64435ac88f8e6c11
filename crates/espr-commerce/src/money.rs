//! Money type for representing peso amounts.
//!
//! Uses centavo-based integer representation so that subtotal, tax and total
//! always add up exactly. On the wire an amount is a plain JSON number in
//! pesos (`49.99`), which is how stored carts and orders have always looked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use crate::CommerceError;

/// Display symbol for the Philippine peso.
pub const CURRENCY_SYMBOL: &str = "\u{20b1}";

/// Centavos per peso.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in pesos.
///
/// Amounts are stored in centavos. Arithmetic saturates instead of
/// overflowing; no realistic cart gets anywhere near `i64::MAX` centavos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    /// Amount in centavos.
    pub amount_cents: i64,
}

impl Money {
    /// Create a Money value from centavos.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal peso amount, rounded to the centavo.
    ///
    /// ```
    /// use espr_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero pesos.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal peso value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Take `percent` percent of this amount, rounding half away from zero.
    pub fn percent(&self, percent: i64) -> Money {
        let scaled = self.amount_cents.saturating_mul(percent);
        let mut cents = scaled / CENTS_PER_UNIT;
        let remainder = scaled % CENTS_PER_UNIT;
        if remainder.abs() * 2 >= CENTS_PER_UNIT {
            cents += scaled.signum();
        }
        Money::new(cents)
    }

    /// Format as a display string without symbol (e.g. "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let unit = CENTS_PER_UNIT as u64;
        format!("{}{}.{:02}", sign, abs / unit, abs % unit)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.to_decimal()
    }
}

impl TryFrom<f64> for Money {
    type Error = CommerceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if amount.is_finite() {
            Ok(Money::from_decimal(amount))
        } else {
            Err(CommerceError::InvalidAmount(amount))
        }
    }
}

impl fmt::Display for Money {
    /// Format as e.g. "₱49.99", or "-₱5.00" for negative amounts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = Money::new(self.amount_cents.saturating_abs());
        if self.is_negative() {
            write!(f, "-{}{}", CURRENCY_SYMBOL, abs.display_amount())
        } else {
            write!(f, "{}{}", CURRENCY_SYMBOL, abs.display_amount())
        }
    }
}
