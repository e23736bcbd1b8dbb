//! Monetary amounts in integer minor units
//!
//! All ledger arithmetic runs on whole minor currency units (cents), which
//! keeps the exact-sum invariants free of binary floating-point drift.
//! Decimal amounts exist only at the input/output boundary and are converted
//! through [`Money::from_decimal`] / [`Money::to_decimal`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of decimal places in one minor currency unit (cents)
pub const MINOR_UNIT_SCALE: u32 = 2;

/// A signed monetary amount in minor currency units
///
/// Positive amounts represent credit ("is owed"), negative amounts represent
/// debt ("owes") wherever `Money` appears in a balance context.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create an amount from a raw count of minor units
    pub const fn from_minor_units(units: i64) -> Self {
        Money(units)
    }

    /// The raw count of minor units
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Convert a decimal amount into minor units
    ///
    /// Returns `None` when the decimal carries more fractional digits than
    /// the minor-unit scale (e.g. `10.005` with cent granularity) or does not
    /// fit in an `i64`. Excess precision is rejected, never silently rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use split_ledger_engine::types::Money;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(1001, 2)), Some(Money::from_minor_units(1001)));
    /// assert_eq!(Money::from_decimal(Decimal::new(10005, 3)), None);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let scaled = amount.checked_mul(Decimal::from(10i64.pow(MINOR_UNIT_SCALE)))?;
        if !scaled.fract().is_zero() {
            return None;
        }
        scaled.to_i64().map(Money)
    }

    /// Convert back to a decimal amount with minor-unit scale
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }

    /// True if the amount is exactly zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True if the amount is strictly positive
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// True if the amount is strictly negative
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(self) -> Money {
        Money(self.0.abs())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
