//! # bistro-core: Pure Billing Logic for Bistro POS
//!
//! This crate is the **heart** of Bistro POS. Every front end — the
//! command-line till today, anything else tomorrow — computes bills and
//! renders receipts through the three operations here, so billing behaves
//! identically everywhere.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (apps/till)                        │   │
//! │  │    collect order ──► compute ──► number ──► render ──► persist  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   bill    │  │  receipt  │  │  billno   │  │   money   │  │   │
//! │  │   │ Calculator│  │ Formatter │  │ generator │  │  Decimal  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              bistro-store (persistence layer)                   │   │
//! │  │          menu JSON file · receipt text files                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Menu, Order, Bill, charge rates)
//! - [`money`] - Decimal money with a single shared currency formatter
//! - [`bill`] - The bill calculator
//! - [`receipt`] - The fixed-width receipt formatter
//! - [`billno`] - Bill number generation
//! - [`validation`] - Input validation for the edges
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: compute and render are deterministic — same input,
//!    same output (the clock and RNG live only in [`billno`])
//! 2. **No I/O**: file, database, and network access are FORBIDDEN here
//! 3. **Exact Money**: decimals accumulate at full precision; rounding to
//!    2 places happens once, at the output boundary
//! 4. **Injected Configuration**: charge rates and receipt header strings
//!    are constructor arguments, never process-wide mutable state
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{BillCalculator, Menu, Order, ReceiptFormatter};
//!
//! let mut menu = Menu::new();
//! menu.insert("Veg Burger".to_string(), "80".parse().unwrap());
//! menu.insert("Cold Coffee".to_string(), "90".parse().unwrap());
//!
//! let order = Order::from_pairs([("Veg Burger", 2), ("Cold Coffee", 1)]);
//! let bill = BillCalculator::default().compute(&order, &menu);
//! assert_eq!(bill.grand_total.to_string(), "267.50");
//!
//! let receipt = ReceiptFormatter::default()
//!     .render("202401011234", "2024-01-01 12:00:00", &bill);
//! assert!(receipt.contains("Veg Burger"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod billno;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use bill::BillCalculator;
pub use billno::{bill_number_for, generate_bill_number};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use receipt::{ReceiptConfig, ReceiptFormatter};
pub use types::{Bill, BillItem, ChargeRate, ChargeRates, Menu, Order, OrderLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item on one bill.
///
/// Guards against fat-finger entry (1000 instead of 10). Enforced by
/// [`validation::validate_quantity`] at the input edge, not by the
/// calculator itself.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a menu item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 100;
