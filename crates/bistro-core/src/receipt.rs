//! # Receipt Formatter
//!
//! Renders a computed [`Bill`] as fixed-width plain text, suitable for a
//! terminal, a text file, or a line printer.
//!
//! ## Layout
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     BISTRO HOUSE                      │  header block
//! │                 12 Harbour Lane, ...                  │  (centered)
//! │                Phone: +91-98765-43210                 │
//! │                                                       │
//! │ Bill No : 202401011234                                │
//! │ Date    : 2024-01-01 12:00:00                         │
//! │ ----------------------------------------------------- │
//! │ Item                            Qty     Price   Total │  30/5/10/10
//! │ ----------------------------------------------------- │
//! │ Veg Burger                        2    ₹80.00 ₹160.00 │
//! │ ----------------------------------------------------- │
//! │ Subtotal:                                     ₹160.00 │  summary block,
//! │ GST (5%):                                       ₹8.00 │  right-aligned
//! │ Service (2%):                                   ₹3.20 │  to the table
//! │ Grand Total:                                  ₹171.20 │  width
//! │                                                       │
//! │ Thank you! Visit again.                               │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! The formatter is deterministic: the bill number and timestamp are caller
//! inputs, never read from a clock here.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Bill;

// =============================================================================
// Column Layout
// =============================================================================

/// Item name column width (left-aligned).
pub const ITEM_COL: usize = 30;
/// Quantity column width (right-aligned).
pub const QTY_COL: usize = 5;
/// Unit price column width (right-aligned).
pub const PRICE_COL: usize = 10;
/// Line total column width (right-aligned).
pub const TOTAL_COL: usize = 10;
/// Full table width; separators and summary values align to this.
pub const RECEIPT_WIDTH: usize = ITEM_COL + QTY_COL + PRICE_COL + TOTAL_COL;

// =============================================================================
// Receipt Configuration
// =============================================================================

/// Static strings printed on every receipt, injected at construction.
///
/// Front ends load these from their own settings; tests pin them. Nothing
/// here is global mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptConfig {
    /// Restaurant name shown at the top of the receipt.
    pub restaurant_name: String,
    /// Single address line under the name.
    pub address: String,
    /// Phone number; rendered with a `Phone: ` prefix.
    pub phone: String,
    /// Currency symbol prefix for every monetary value.
    pub currency_symbol: String,
    /// Closing line under the totals.
    pub farewell: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        ReceiptConfig {
            restaurant_name: "BISTRO HOUSE".to_string(),
            address: "12 Harbour Lane, Old Town".to_string(),
            phone: "+91-98765-43210".to_string(),
            currency_symbol: "₹".to_string(),
            farewell: "Thank you! Visit again.".to_string(),
        }
    }
}

// =============================================================================
// Receipt Formatter
// =============================================================================

/// Renders bills as fixed-width receipt text using an injected
/// [`ReceiptConfig`].
///
/// ## Usage
/// ```rust
/// use bistro_core::{BillCalculator, Menu, Order, ReceiptFormatter};
///
/// let mut menu = Menu::new();
/// menu.insert("Veg Burger".to_string(), "80".parse().unwrap());
/// let bill = BillCalculator::default().compute(&Order::from_pairs([("Veg Burger", 2)]), &menu);
///
/// let text = ReceiptFormatter::default().render("202401011234", "2024-01-01 12:00:00", &bill);
/// assert!(text.contains("Grand Total:"));
/// assert!(text.ends_with("Thank you! Visit again."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptFormatter {
    config: ReceiptConfig,
}

impl ReceiptFormatter {
    /// Creates a formatter with the given configuration.
    pub fn new(config: ReceiptConfig) -> Self {
        ReceiptFormatter { config }
    }

    /// Returns the formatter's configuration.
    pub fn config(&self) -> &ReceiptConfig {
        &self.config
    }

    /// Renders the receipt text for a bill.
    ///
    /// `bill_no` and `timestamp` are supplied by the caller (see
    /// [`crate::billno::generate_bill_number`] and the front ends), keeping
    /// this function deterministic.
    pub fn render(&self, bill_no: &str, timestamp: &str, bill: &Bill) -> String {
        let mut lines = Vec::with_capacity(bill.items.len() + 14);

        lines.push(center(&self.config.restaurant_name));
        lines.push(center(&self.config.address));
        lines.push(center(&format!("Phone: {}", self.config.phone)));
        lines.push(String::new());

        lines.push(format!("Bill No : {bill_no}"));
        lines.push(format!("Date    : {timestamp}"));

        lines.push(separator());
        lines.push(table_row("Item", "Qty", "Price", "Total"));
        lines.push(separator());

        for item in &bill.items {
            lines.push(table_row(
                &item.name,
                &item.quantity.to_string(),
                &self.currency(item.unit_price),
                &self.currency(item.line_total),
            ));
        }

        lines.push(separator());
        lines.push(summary_line("Subtotal:", &self.currency(bill.subtotal)));
        lines.push(summary_line(
            &format!("GST ({}):", bill.tax_rate),
            &self.currency(bill.tax),
        ));
        lines.push(summary_line(
            &format!("Service ({}):", bill.service_rate),
            &self.currency(bill.service),
        ));
        lines.push(summary_line(
            "Grand Total:",
            &self.currency(bill.grand_total),
        ));

        lines.push(String::new());
        lines.push(self.config.farewell.clone());

        lines.join("\n")
    }

    /// Every monetary value on the receipt goes through this one call.
    fn currency(&self, amount: Money) -> String {
        amount.format_with(&self.config.currency_symbol)
    }
}

/// Dashed rule spanning the table width.
fn separator() -> String {
    "-".repeat(RECEIPT_WIDTH)
}

/// One 30/5/10/10 table row; the item column is left-aligned, the rest
/// right-aligned.
fn table_row(item: &str, qty: &str, price: &str, total: &str) -> String {
    format!(
        "{item:<iw$}{qty:>qw$}{price:>pw$}{total:>tw$}",
        iw = ITEM_COL,
        qw = QTY_COL,
        pw = PRICE_COL,
        tw = TOTAL_COL,
    )
}

/// Centers a header line within the table width.
fn center(text: &str) -> String {
    let width = RECEIPT_WIDTH;
    format!("{text:^width$}").trim_end().to_string()
}

/// `label` on the left, `value` right-aligned so the line ends at the table
/// width. Labels are ASCII, so byte length equals column count here.
fn summary_line(label: &str, value: &str) -> String {
    let pad = RECEIPT_WIDTH.saturating_sub(label.len());
    format!("{label}{value:>pad$}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::BillCalculator;
    use crate::types::{Menu, Order};

    fn one_burger_bill() -> Bill {
        let mut menu = Menu::new();
        menu.insert("Veg Burger".to_string(), "80.0".parse().unwrap());
        BillCalculator::default().compute(&Order::from_pairs([("Veg Burger", 2)]), &menu)
    }

    fn render_one_burger() -> String {
        ReceiptFormatter::default().render("202401011234", "2024-01-01 12:00:00", &one_burger_bill())
    }

    #[test]
    fn test_header_and_stamp_lines() {
        let text = render_one_burger();

        assert!(text.contains("BISTRO HOUSE"));
        assert!(text.contains("Phone: +91-98765-43210"));
        assert!(text.contains("Bill No : 202401011234"));
        assert!(text.contains("Date    : 2024-01-01 12:00:00"));
    }

    #[test]
    fn test_item_appears_exactly_once_and_aligned() {
        let text = render_one_burger();

        assert_eq!(text.matches("Veg Burger").count(), 1);

        let expected_row = format!(
            "{:<30}{:>5}{:>10}{:>10}",
            "Veg Burger", 2, "₹80.00", "₹160.00"
        );
        assert!(text.lines().any(|l| l == expected_row), "row missing or misaligned:\n{text}");
    }

    #[test]
    fn test_column_header_row() {
        let text = render_one_burger();
        let expected = format!("{:<30}{:>5}{:>10}{:>10}", "Item", "Qty", "Price", "Total");
        assert!(text.lines().any(|l| l == expected));
    }

    #[test]
    fn test_separators_span_table_width() {
        let text = render_one_burger();
        let rules: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && l.chars().all(|c| c == '-'))
            .collect();
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|l| l.len() == RECEIPT_WIDTH));
    }

    #[test]
    fn test_summary_lines_right_aligned_to_width() {
        let text = render_one_burger();

        for label in ["Subtotal:", "GST (5%):", "Service (2%):", "Grand Total:"] {
            let line = text
                .lines()
                .find(|l| l.starts_with(label))
                .unwrap_or_else(|| panic!("missing summary line {label}"));
            assert_eq!(line.chars().count(), RECEIPT_WIDTH, "bad width: {line:?}");
        }
        assert!(text.contains("₹171.20"));
    }

    #[test]
    fn test_ends_with_farewell() {
        let text = render_one_burger();
        assert!(text.ends_with("Thank you! Visit again."));
    }

    #[test]
    fn test_empty_bill_renders_zero_totals() {
        let bill = BillCalculator::default().compute(&Order::new(), &Menu::new());
        let text = ReceiptFormatter::default().render("202401010000", "2024-01-01 00:00:00", &bill);

        let subtotal = text.lines().find(|l| l.starts_with("Subtotal:")).unwrap();
        assert!(subtotal.ends_with("₹0.00"));
        assert!(text.ends_with("Thank you! Visit again."));

        // No item rows: the two table separators are adjacent.
        let lines: Vec<&str> = text.lines().collect();
        let rule_positions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_empty() && l.chars().all(|c| c == '-'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rule_positions[2] - rule_positions[1], 1);
    }

    #[test]
    fn test_custom_config() {
        let config = ReceiptConfig {
            restaurant_name: "CHAI CORNER".to_string(),
            address: "1 Test Lane".to_string(),
            phone: "000".to_string(),
            currency_symbol: "$".to_string(),
            farewell: "Come again.".to_string(),
        };
        let text =
            ReceiptFormatter::new(config).render("202401011234", "2024-01-01 12:00:00", &one_burger_bill());

        assert!(text.contains("CHAI CORNER"));
        assert!(text.contains("$160.00"));
        assert!(!text.contains('₹'));
        assert!(text.ends_with("Come again."));
    }
}
