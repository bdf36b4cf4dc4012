//! # Bistro POS Till
//!
//! Command-line front end: edit the menu, cut bills, reprint receipts.
//!
//! ## Usage
//! ```bash
//! # Show the menu (seeds the default menu on first run)
//! till menu list
//!
//! # Edit the menu
//! till menu add "Lassi" 60
//! till menu set "Cold Coffee" 95
//! till menu remove "Naan (2 pcs)"
//!
//! # Cut a bill: prints the receipt and stores it under bills/
//! till charge "Veg Burger=2" "Cold Coffee=1"
//!
//! # Reprint a stored receipt
//! till show 202401011234
//! ```
//!
//! ## Environment
//! - `BISTRO_MENU_FILE` / `BISTRO_BILLS_DIR`: storage locations
//!   (also available as `--menu-file` / `--bills-dir`)
//! - `BISTRO_RESTAURANT_NAME` / `BISTRO_ADDRESS` / `BISTRO_PHONE`:
//!   receipt header
//! - `BISTRO_CURRENCY_SYMBOL`: currency prefix
//! - `BISTRO_GST_PERCENT` / `BISTRO_SERVICE_PERCENT`: charge rates
//! - `RUST_LOG`: log filter (defaults to `info`)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use bistro_core::validation::{parse_price, parse_quantity};
use bistro_core::{
    generate_bill_number, BillCalculator, ChargeRate, ChargeRates, Menu, Order, ReceiptConfig,
    ReceiptFormatter,
};
use bistro_store::{MenuStore, ReceiptStore, DEFAULT_BILLS_DIR, DEFAULT_MENU_FILE};

// =============================================================================
// CLI Definition
// =============================================================================

#[derive(Parser)]
#[command(name = "till", about = "Bistro POS command-line till", version)]
struct Cli {
    /// Menu file path (overrides BISTRO_MENU_FILE)
    #[arg(long, value_name = "FILE")]
    menu_file: Option<PathBuf>,

    /// Bills directory (overrides BISTRO_BILLS_DIR)
    #[arg(long, value_name = "DIR")]
    bills_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List or edit the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Compute a bill for the given order and print its receipt
    Charge {
        /// Order lines as ITEM=QTY (e.g. "Veg Burger=2")
        #[arg(required = true, value_name = "ITEM=QTY")]
        lines: Vec<String>,

        /// Print the receipt without writing it to the bills directory
        #[arg(long)]
        no_save: bool,
    },

    /// Print a previously stored receipt
    Show {
        /// Bill number, as printed on the receipt
        bill_no: String,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Print the menu with prices
    List,
    /// Add a new item
    Add { name: String, price: String },
    /// Change the price of an existing item
    Set { name: String, price: String },
    /// Remove an item
    Remove { name: String },
}

// =============================================================================
// Configuration
// =============================================================================

/// Till configuration resolved from defaults and environment variables.
///
/// Flags beat environment beats defaults, the usual order.
struct TillConfig {
    menu_file: PathBuf,
    bills_dir: PathBuf,
    rates: ChargeRates,
    receipt: ReceiptConfig,
}

impl TillConfig {
    fn from_env() -> Self {
        let mut config = TillConfig {
            menu_file: PathBuf::from(DEFAULT_MENU_FILE),
            bills_dir: PathBuf::from(DEFAULT_BILLS_DIR),
            rates: ChargeRates::default(),
            receipt: ReceiptConfig::default(),
        };

        if let Ok(path) = env::var("BISTRO_MENU_FILE") {
            config.menu_file = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("BISTRO_BILLS_DIR") {
            config.bills_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("BISTRO_RESTAURANT_NAME") {
            config.receipt.restaurant_name = name;
        }
        if let Ok(address) = env::var("BISTRO_ADDRESS") {
            config.receipt.address = address;
        }
        if let Ok(phone) = env::var("BISTRO_PHONE") {
            config.receipt.phone = phone;
        }
        if let Ok(symbol) = env::var("BISTRO_CURRENCY_SYMBOL") {
            config.receipt.currency_symbol = symbol;
        }
        if let Some(pct) = percent_from_env("BISTRO_GST_PERCENT") {
            config.rates.tax = ChargeRate::from_percent(pct);
        }
        if let Some(pct) = percent_from_env("BISTRO_SERVICE_PERCENT") {
            config.rates.service = ChargeRate::from_percent(pct);
        }

        config
    }
}

/// Reads a decimal percentage from the environment; unset or unparsable
/// values fall back to the default rate.
fn percent_from_env(key: &str) -> Option<Decimal> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = TillConfig::from_env();
    if let Some(path) = cli.menu_file {
        config.menu_file = path;
    }
    if let Some(dir) = cli.bills_dir {
        config.bills_dir = dir;
    }

    let menu_store = MenuStore::new(&config.menu_file);

    match cli.command {
        Command::Menu { action } => run_menu(&menu_store, &config, action),
        Command::Charge { lines, no_save } => run_charge(&menu_store, &config, &lines, no_save),
        Command::Show { bill_no } => run_show(&config, &bill_no),
    }
}

// =============================================================================
// Commands
// =============================================================================

fn run_menu(store: &MenuStore, config: &TillConfig, action: MenuAction) -> anyhow::Result<()> {
    match action {
        MenuAction::List => {
            let menu = store.load_or_seed()?;
            print_menu(&menu, config);
        }
        MenuAction::Add { name, price } => {
            store.add_item(&name, parse_price(&price)?)?;
            println!("Added '{}'", name.trim());
        }
        MenuAction::Set { name, price } => {
            store.update_item(&name, parse_price(&price)?)?;
            println!("Updated '{}'", name.trim());
        }
        MenuAction::Remove { name } => {
            store.remove_item(&name)?;
            println!("Removed '{}'", name.trim());
        }
    }
    Ok(())
}

fn run_charge(
    store: &MenuStore,
    config: &TillConfig,
    lines: &[String],
    no_save: bool,
) -> anyhow::Result<()> {
    let menu = store.load_or_seed()?;

    let mut order = Order::new();
    for arg in lines {
        let (name, quantity) = parse_order_line(arg)?;
        order.set(name, quantity);
    }

    let bill = BillCalculator::new(config.rates).compute(&order, &menu);
    let bill_no = generate_bill_number();
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let receipt = ReceiptFormatter::new(config.receipt.clone()).render(&bill_no, &timestamp, &bill);
    println!("{receipt}");

    if !no_save {
        let path = ReceiptStore::new(&config.bills_dir).save(&bill_no, &receipt)?;
        println!();
        println!("Saved {}", path.display());
    }

    Ok(())
}

fn run_show(config: &TillConfig, bill_no: &str) -> anyhow::Result<()> {
    let text = ReceiptStore::new(&config.bills_dir).load(bill_no)?;
    println!("{text}");
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Splits an `ITEM=QTY` argument. The quantity is coerced the way the core
/// expects: junk becomes 0, and 0 lines are dropped from the bill.
fn parse_order_line(arg: &str) -> anyhow::Result<(String, i64)> {
    let (name, qty) = arg
        .split_once('=')
        .with_context(|| format!("expected ITEM=QTY, got '{arg}'"))?;
    Ok((name.trim().to_string(), parse_quantity(qty)))
}

fn print_menu(menu: &Menu, config: &TillConfig) {
    if menu.is_empty() {
        println!("(menu is empty)");
        return;
    }

    for (name, price) in menu {
        println!(
            "{:<30}{:>10}",
            name,
            price.format_with(&config.receipt.currency_symbol)
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_line() {
        assert_eq!(
            parse_order_line("Veg Burger=2").unwrap(),
            ("Veg Burger".to_string(), 2)
        );
        assert_eq!(
            parse_order_line(" Tea = 3 ").unwrap(),
            ("Tea".to_string(), 3)
        );
    }

    #[test]
    fn test_parse_order_line_coerces_bad_quantity() {
        assert_eq!(parse_order_line("Tea=lots").unwrap(), ("Tea".to_string(), 0));
        assert_eq!(parse_order_line("Tea=").unwrap(), ("Tea".to_string(), 0));
    }

    #[test]
    fn test_parse_order_line_requires_separator() {
        assert!(parse_order_line("Just A Name").is_err());
    }
}
