//! # Validation Module
//!
//! Input validation for the edges of the billing core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Front end input (CLI args, form fields)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: names, prices, quantities                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BillCalculator — assumes quantities are already integers; its own      │
//! │  handling is limited to skipping qty ≤ 0 and zero-pricing unknown       │
//! │  names. It never raises.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed quantity text is COERCED, not rejected: `parse_quantity`
//! returns 0 for junk, and a zero quantity is simply excluded from the
//! bill. That mirrors how a till behaves — a mistyped quantity drops the
//! line instead of aborting the sale.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_QUANTITY};

// =============================================================================
// Item Names
// =============================================================================

/// Validates a menu item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Veg Burger ").unwrap(), "Veg Burger");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Prices
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (complimentary items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses a price string into a validated [`Money`] value.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::parse_price;
///
/// assert!(parse_price("80.50").is_ok());
/// assert!(parse_price("free").is_err());
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let amount = Decimal::from_str(raw.trim()).map_err(|e| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: e.to_string(),
    })?;

    let price = Money::new(amount);
    validate_price(price)?;
    Ok(price)
}

// =============================================================================
// Quantities
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Coerces raw quantity text to an integer, treating junk as 0.
///
/// Zero and negative quantities are excluded later by the calculator, so a
/// mistyped quantity silently drops that line instead of failing the bill.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("3"), 3);
/// assert_eq!(parse_quantity(" 2 "), 2);
/// assert_eq!(parse_quantity("two"), 0);
/// assert_eq!(parse_quantity(""), 0);
/// ```
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
