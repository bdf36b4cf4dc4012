//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 arithmetic:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Prices like 33.333 stay exact through accumulation.                  │
//! │    Rounding to 2 decimal places happens ONCE, at the output             │
//! │    boundary, so rounding error never compounds across lines.            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::Money;
//!
//! let price: Money = "10.99".parse().unwrap();
//! let doubled = price * 2;
//! assert_eq!(doubled.to_string(), "21.98");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::ChargeRate;

/// Rounding applied at every output boundary: 2 decimal places, half-up.
///
/// Half-up (round half away from zero) is the conventional retail rule:
/// `0.005` becomes `0.01`. Pinned here so every call site rounds the same way.
const DECIMAL_PLACES: u32 = 2;
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with full decimal precision.
///
/// ## Design Decisions
/// - **Decimal (not f64)**: exact accumulation; no binary float drift
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Serialized as a JSON number**: the menu file and `Bill` objects read
///   naturally (`"Veg Burger": 80.0`)
///
/// Internal arithmetic keeps full precision. Call [`Money::rounded`] (or a
/// formatter, which rounds for you) only when a figure leaves the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Zero money value.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a Money value from a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount (unrounded).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::Money;
    ///
    /// let unit_price: Money = "2.99".parse().unwrap();
    /// let line_total = unit_price.times(3);
    /// assert_eq!(line_total.to_string(), "8.97");
    /// ```
    #[inline]
    pub fn times(&self, qty: i64) -> Money {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a percentage charge rate and returns the charge amount.
    ///
    /// The result is UNROUNDED: `160.00` at 5% yields exactly `8.000`.
    /// Aggregates derived from it are rounded once, at the output boundary.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{ChargeRate, Money};
    ///
    /// let subtotal: Money = "160".parse().unwrap();
    /// let gst = subtotal.apply_rate(ChargeRate::from_percent("5".parse().unwrap()));
    /// assert_eq!(gst.rounded().to_string(), "8.00");
    /// ```
    pub fn apply_rate(&self, rate: ChargeRate) -> Money {
        Money(self.0 * rate.percent() / Decimal::ONE_HUNDRED)
    }

    /// Rounds to 2 decimal places, half-up.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::Money;
    ///
    /// let m: Money = "0.005".parse().unwrap();
    /// assert_eq!(m.rounded().to_string(), "0.01");
    /// ```
    #[inline]
    pub fn rounded(&self) -> Money {
        Money(self.0.round_dp_with_strategy(DECIMAL_PLACES, ROUNDING))
    }

    /// Formats the value as currency with a symbol prefix, thousands
    /// separators, and exactly 2 decimal places.
    ///
    /// This is the ONE currency formatter in the system; every display
    /// site (receipt rows, summary lines, menu listings) goes through it.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::Money;
    ///
    /// let m: Money = "1234.5".parse().unwrap();
    /// assert_eq!(m.format_with("₹"), "₹1,234.50");
    /// assert_eq!(Money::ZERO.format_with("₹"), "₹0.00");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let cents = self.to_cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            symbol,
            group_thousands((cents / 100).abs()),
            (cents % 100).abs()
        )
    }

    /// Half-up rounded value in hundredths, for digit-exact formatting.
    fn to_cents(&self) -> i64 {
        (self.rounded().0 * Decimal::ONE_HUNDRED)
            .to_i64()
            .unwrap_or_default()
    }
}

/// Inserts a comma every three digits: `1234567` → `"1,234,567"`.
///
/// `whole` must be non-negative; the sign is handled by the caller.
fn group_thousands(whole: i64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the rounded amount without a currency symbol.
///
/// For customer-facing output use [`Money::format_with`]; this form is for
/// logs and debug strings.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.to_cents();
        write!(
            f,
            "{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(Decimal::from(units))
    }
}

/// Parses a decimal literal such as `"80"` or `"12.50"`.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.times(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_arithmetic_keeps_full_precision() {
        let a = Money::new(dec!(33.333));
        let line = a.times(3);
        assert_eq!(line.amount(), dec!(99.999));
        assert_eq!(line.rounded().amount(), dec!(100.00));
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(Money::new(dec!(0.005)).rounded().amount(), dec!(0.01));
        assert_eq!(Money::new(dec!(0.004)).rounded().amount(), dec!(0.00));
        assert_eq!(Money::new(dec!(2.675)).rounded().amount(), dec!(2.68));
        assert_eq!(Money::new(dec!(-0.005)).rounded().amount(), dec!(-0.01));
    }

    #[test]
    fn test_apply_rate() {
        let subtotal = Money::new(dec!(160.00));
        let gst = subtotal.apply_rate(ChargeRate::from_percent(dec!(5.0)));
        let service = subtotal.apply_rate(ChargeRate::from_percent(dec!(2.0)));
        assert_eq!(gst.rounded().amount(), dec!(8.00));
        assert_eq!(service.rounded().amount(), dec!(3.20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(10.99)).to_string(), "10.99");
        assert_eq!(Money::new(dec!(5)).to_string(), "5.00");
        assert_eq!(Money::new(dec!(-5.5)).to_string(), "-5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol_and_separators() {
        assert_eq!(Money::new(dec!(80)).format_with("₹"), "₹80.00");
        assert_eq!(Money::new(dec!(1234.5)).format_with("₹"), "₹1,234.50");
        assert_eq!(Money::new(dec!(1234567.89)).format_with("₹"), "₹1,234,567.89");
        assert_eq!(Money::new(dec!(-1234.5)).format_with("₹"), "-₹1,234.50");
        assert_eq!(Money::ZERO.format_with("$"), "$0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_parse() {
        let m: Money = " 12.50 ".parse().unwrap();
        assert_eq!(m.amount(), dec!(12.50));
        assert!("not-a-price".parse::<Money>().is_err());
    }

    #[test]
    fn test_serde_round_trip_as_number() {
        let m = Money::new(dec!(80.0));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "80.0");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_zero_checks() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::new(dec!(-1)).is_negative());
        assert!(!Money::new(dec!(1)).is_negative());
    }
}
