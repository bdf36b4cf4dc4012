//! # Domain Types
//!
//! Core domain types used throughout Bistro POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Menu        │   │     Order       │   │      Bill       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name → price   │   │  OrderLine      │   │  BillItem rows  │       │
//! │  │  (snapshot)     │   │  name, qty      │   │  subtotal, tax  │       │
//! │  │                 │   │  keeps insert   │   │  service, grand │       │
//! │  │                 │   │  order          │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ChargeRate    │   │   ChargeRates   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  percent (dec)  │   │  tax + service  │                             │
//! │  │  5.0 = 5%       │   │  (5%, 2%)       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item names are the natural keys of this system: the menu maps them to
//! prices and the order maps them to quantities. A `Bill` is the computed
//! join of the two, produced by [`crate::bill::BillCalculator`].

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Charge Rate
// =============================================================================

/// A percentage rate applied to a bill's subtotal.
///
/// Stored as a decimal percentage: `5.0` means 5%. Rates are configuration
/// values injected into the [`crate::bill::BillCalculator`], never global
/// mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRate(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl ChargeRate {
    /// Creates a charge rate from a decimal percentage (`5.0` = 5%).
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        ChargeRate(percent)
    }

    /// Returns the rate as a decimal percentage.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero charge rate.
    #[inline]
    pub fn zero() -> Self {
        ChargeRate(Decimal::ZERO)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The percentage with trailing zeros trimmed, for receipt labels:
    /// `5.0` → `"5"`, `8.25` → `"8.25"`.
    pub fn percent_label(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl Default for ChargeRate {
    fn default() -> Self {
        ChargeRate::zero()
    }
}

impl fmt::Display for ChargeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent_label())
    }
}

/// The pair of percentage charges applied to every bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRates {
    /// Goods and services tax, as a percentage of the subtotal.
    pub tax: ChargeRate,
    /// Service charge, as a percentage of the subtotal.
    pub service: ChargeRate,
}

impl ChargeRates {
    /// Creates a rate pair from decimal percentages.
    pub fn new(tax_percent: Decimal, service_percent: Decimal) -> Self {
        ChargeRates {
            tax: ChargeRate::from_percent(tax_percent),
            service: ChargeRate::from_percent(service_percent),
        }
    }
}

/// House defaults: GST 5%, service charge 2%.
impl Default for ChargeRates {
    fn default() -> Self {
        ChargeRates::new(Decimal::new(5, 0), Decimal::new(2, 0))
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The menu snapshot a bill is computed against: item name → unit price.
///
/// Owned and persisted by the caller (see `bistro-store`); the core only
/// reads it. `BTreeMap` keeps listings and the saved JSON deterministic.
pub type Menu = BTreeMap<String, Money>;

// =============================================================================
// Order
// =============================================================================

/// One requested line of an order: an item name and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
}

/// A customer's requested quantities for a single bill.
///
/// ## Invariants
/// - Names are unique; [`Order::set`] replaces the quantity of an existing
///   name in place rather than appending a duplicate line.
/// - Insertion order is preserved and carries through to the bill's rows.
///
/// Quantities are stored as given (including zero or negative values from
/// sloppy input); the calculator skips non-positive lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Builds an order from `(name, quantity)` pairs, first-seen order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut order = Order::new();
        for (name, quantity) in pairs {
            order.set(name, quantity);
        }
        order
    }

    /// Sets the requested quantity for an item.
    ///
    /// An existing line keeps its position and gets the new quantity; a new
    /// name is appended at the end.
    pub fn set(&mut self, name: impl Into<String>, quantity: i64) {
        let name = name.into();
        if let Some(line) = self.lines.iter_mut().find(|l| l.name == name) {
            line.quantity = quantity;
        } else {
            self.lines.push(OrderLine { name, quantity });
        }
    }

    /// Returns the requested quantity for an item, if present.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.quantity)
    }

    /// Iterates the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter()
    }

    /// Number of lines (including non-positive quantities).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether the order has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Bill
// =============================================================================

/// One computed row of a bill.
///
/// The unit price is resolved from the menu at compute time and frozen here,
/// so a later menu edit never changes an existing bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillItem {
    /// Item name as ordered.
    pub name: String,
    /// Quantity billed (always positive).
    pub quantity: i64,
    /// Unit price resolved from the menu, rounded for display.
    pub unit_price: Money,
    /// `unit_price × quantity`, accumulated unrounded, rounded for display.
    pub line_total: Money,
}

/// A computed bill: itemized rows plus aggregate totals.
///
/// ## Invariants
/// - `items` preserves the order's insertion order.
/// - Aggregates are each rounded from a full-precision accumulation;
///   `grand_total = subtotal + tax + service` holds pre-rounding.
/// - The rates that produced the bill travel with it, so formatters never
///   reach for separate configuration that could disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Itemized rows, in order-entry order.
    pub items: Vec<BillItem>,
    /// Sum of line totals, rounded to 2 decimal places.
    pub subtotal: Money,
    /// Tax amount derived from the subtotal.
    pub tax: Money,
    /// Service charge derived from the subtotal.
    pub service: Money,
    /// `subtotal + tax + service`.
    pub grand_total: Money,
    /// Tax rate applied.
    pub tax_rate: ChargeRate,
    /// Service charge rate applied.
    pub service_rate: ChargeRate,
}

impl Bill {
    /// Checks whether the bill has no billable rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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
    fn test_default_rates() {
        let rates = ChargeRates::default();
        assert_eq!(rates.tax.percent(), dec!(5));
        assert_eq!(rates.service.percent(), dec!(2));
    }

    #[test]
    fn test_percent_label_trims_trailing_zeros() {
        assert_eq!(ChargeRate::from_percent(dec!(5.0)).percent_label(), "5");
        assert_eq!(ChargeRate::from_percent(dec!(8.25)).percent_label(), "8.25");
        assert_eq!(ChargeRate::from_percent(dec!(5.0)).to_string(), "5%");
    }

    #[test]
    fn test_order_preserves_insertion_order() {
        let mut order = Order::new();
        order.set("Tea", 1);
        order.set("Coffee", 2);
        order.set("Water", 3);

        let names: Vec<&str> = order.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Tea", "Coffee", "Water"]);
    }

    #[test]
    fn test_order_set_replaces_in_place() {
        let mut order = Order::new();
        order.set("Tea", 1);
        order.set("Coffee", 2);
        order.set("Tea", 5);

        assert_eq!(order.len(), 2);
        assert_eq!(order.get("Tea"), Some(5));
        let names: Vec<&str> = order.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Tea", "Coffee"]);
    }

    #[test]
    fn test_order_serializes_as_line_array() {
        let order = Order::from_pairs([("Tea", 2)]);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"[{"name":"Tea","quantity":2}]"#);
    }

    #[test]
    fn test_menu_serializes_prices_as_numbers() {
        let mut menu = Menu::new();
        menu.insert("Veg Burger".to_string(), Money::new(dec!(80.0)));
        let json = serde_json::to_string(&menu).unwrap();
        assert_eq!(json, r#"{"Veg Burger":80.0}"#);
    }
}
