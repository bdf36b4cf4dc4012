//! # Bill Calculator
//!
//! Turns an order and a menu snapshot into an itemized [`Bill`].
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      compute(order, menu)                               │
//! │                                                                         │
//! │  for each order line (insertion order):                                 │
//! │       qty ≤ 0 ───────────────► skipped                                  │
//! │       name not in menu ──────► priced at 0, warning logged              │
//! │       otherwise ─────────────► line_total = price × qty                 │
//! │                                                                         │
//! │  subtotal  = Σ line_total            (full precision)                   │
//! │  tax       = subtotal × tax%         (full precision)                   │
//! │  service   = subtotal × service%     (full precision)                   │
//! │  grand     = subtotal + tax + service                                   │
//! │                                                                         │
//! │  Every figure is rounded to 2 decimal places ONCE, into the             │
//! │  returned Bill. Intermediate accumulation never rounds.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator is a pure function of `(order, menu)`: no clock, no
//! randomness, no I/O. Identical inputs yield identical bills.

use tracing::warn;

use crate::money::Money;
use crate::types::{Bill, BillItem, ChargeRates, Menu, Order};

/// Computes bills with a fixed, injected pair of charge rates.
///
/// Rates are constructor arguments rather than process-wide constants so a
/// till, a test, and a future web front end can each run their own.
///
/// ## Usage
/// ```rust
/// use bistro_core::{BillCalculator, Menu, Money, Order};
///
/// let mut menu = Menu::new();
/// menu.insert("Veg Burger".to_string(), "80".parse().unwrap());
///
/// let order = Order::from_pairs([("Veg Burger", 2)]);
/// let bill = BillCalculator::default().compute(&order, &menu);
///
/// assert_eq!(bill.subtotal.to_string(), "160.00");
/// assert_eq!(bill.grand_total.to_string(), "171.20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillCalculator {
    rates: ChargeRates,
}

impl BillCalculator {
    /// Creates a calculator applying the given rates.
    pub fn new(rates: ChargeRates) -> Self {
        BillCalculator { rates }
    }

    /// Returns the rates this calculator applies.
    pub fn rates(&self) -> ChargeRates {
        self.rates
    }

    /// Computes an itemized bill for `order` against the `menu` snapshot.
    ///
    /// ## Behavior
    /// - Lines with quantity ≤ 0 are excluded.
    /// - A name missing from the menu is billed at price 0 and kept in the
    ///   bill. This is deliberate (a half-taken order still prints); a
    ///   `warn` event is emitted because it usually means a typo in the
    ///   item name.
    /// - An order with no qualifying lines yields an empty bill with all
    ///   totals zero. Never an error: this function is total over its
    ///   inputs.
    pub fn compute(&self, order: &Order, menu: &Menu) -> Bill {
        let mut items = Vec::new();
        let mut subtotal = Money::ZERO;

        for line in order.iter() {
            if line.quantity <= 0 {
                continue;
            }

            let unit_price = match menu.get(&line.name) {
                Some(price) => *price,
                None => {
                    warn!(item = %line.name, "ordered item missing from menu, billing at zero");
                    Money::ZERO
                }
            };

            let line_total = unit_price.times(line.quantity);
            subtotal += line_total;

            items.push(BillItem {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: unit_price.rounded(),
                line_total: line_total.rounded(),
            });
        }

        let tax = subtotal.apply_rate(self.rates.tax);
        let service = subtotal.apply_rate(self.rates.service);
        let grand_total = subtotal + tax + service;

        Bill {
            items,
            subtotal: subtotal.rounded(),
            tax: tax.rounded(),
            service: service.rounded(),
            grand_total: grand_total.rounded(),
            tax_rate: self.rates.tax,
            service_rate: self.rates.service,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
