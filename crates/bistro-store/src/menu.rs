//! # Menu Store
//!
//! Loads and saves the menu as a JSON file: a flat mapping of item name to
//! unit price.
//!
//! ```json
//! {
//!     "Cold Coffee": 90.0,
//!     "Veg Burger": 80.0
//! }
//! ```
//!
//! The file is the single source of truth shared by every front end; the
//! core only ever sees the loaded snapshot. A missing file means an empty
//! menu, and [`MenuStore::load_or_seed`] installs the house default menu on
//! first run.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, info};

use bistro_core::validation::{validate_item_name, validate_price};
use bistro_core::{Menu, Money};

use crate::error::{StoreError, StoreResult};

/// Default location of the menu file, relative to the working directory.
pub const DEFAULT_MENU_FILE: &str = "menu.json";

/// Repository for the menu file.
///
/// ## Usage
/// ```rust,ignore
/// let store = MenuStore::new("menu.json");
///
/// let menu = store.load_or_seed()?;
/// store.add_item("Lassi", "60".parse()?)?;
/// ```
#[derive(Debug, Clone)]
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MenuStore { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the menu. A missing file yields an empty menu, not an error.
    pub fn load(&self) -> StoreResult<Menu> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "menu file absent, starting empty");
            return Ok(Menu::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let menu: Menu = serde_json::from_str(&raw).map_err(|e| StoreError::MalformedMenu {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), items = menu.len(), "menu loaded");
        Ok(menu)
    }

    /// Loads the menu, seeding and saving the default menu if it is empty.
    pub fn load_or_seed(&self) -> StoreResult<Menu> {
        let menu = self.load()?;
        if !menu.is_empty() {
            return Ok(menu);
        }

        let menu = default_menu();
        self.save(&menu)?;
        info!(path = %self.path.display(), "seeded default menu");
        Ok(menu)
    }

    /// Saves the menu as pretty-printed JSON, replacing the file.
    pub fn save(&self, menu: &Menu) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(menu).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), items = menu.len(), "menu saved");
        Ok(())
    }

    /// Adds a new item. Fails if the name is already on the menu.
    pub fn add_item(&self, name: &str, price: Money) -> StoreResult<()> {
        let name = validate_item_name(name)?;
        validate_price(price)?;

        let mut menu = self.load()?;
        if menu.contains_key(&name) {
            return Err(StoreError::DuplicateItem(name));
        }

        menu.insert(name, price);
        self.save(&menu)
    }

    /// Changes the price of an existing item. Fails if the name is unknown.
    pub fn update_item(&self, name: &str, price: Money) -> StoreResult<()> {
        let name = validate_item_name(name)?;
        validate_price(price)?;

        let mut menu = self.load()?;
        if !menu.contains_key(&name) {
            return Err(StoreError::ItemNotFound(name));
        }

        menu.insert(name, price);
        self.save(&menu)
    }

    /// Removes an item. Fails if the name is unknown.
    pub fn remove_item(&self, name: &str) -> StoreResult<()> {
        let name = validate_item_name(name)?;

        let mut menu = self.load()?;
        if menu.remove(&name).is_none() {
            return Err(StoreError::ItemNotFound(name));
        }

        self.save(&menu)
    }
}

/// The house default menu, installed on first run.
pub fn default_menu() -> Menu {
    let rupees = |units: i64| Money::new(Decimal::new(units, 0));

    Menu::from([
        ("Veg Burger".to_string(), rupees(80)),
        ("Cheese Pizza".to_string(), rupees(220)),
        ("French Fries".to_string(), rupees(60)),
        ("Cold Coffee".to_string(), rupees(90)),
        ("Masala Dosa".to_string(), rupees(120)),
        ("Paneer Butter Masala".to_string(), rupees(200)),
        ("Naan (2 pcs)".to_string(), rupees(40)),
        ("Gulab Jamun (2 pcs)".to_string(), rupees(50)),
    ])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> MenuStore {
        MenuStore::new(dir.path().join("menu.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty_menu() {
        let dir = TempDir::new().unwrap();
        let menu = store_in(&dir).load().unwrap();
        assert!(menu.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut menu = Menu::new();
        menu.insert("Tea".to_string(), Money::new(dec!(10.50)));
        menu.insert("Veg Burger".to_string(), Money::new(dec!(80)));
        store.save(&menu).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, menu);
    }

    #[test]
    fn test_load_accepts_plain_json_numbers() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"Veg Burger": 80.0, "Tea": 10}"#).unwrap();

        let menu = store.load().unwrap();
        assert_eq!(menu["Veg Burger"], Money::new(dec!(80)));
        assert_eq!(menu["Tea"], Money::new(dec!(10)));
    }

    #[test]
    fn test_load_malformed_menu_is_typed_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(StoreError::MalformedMenu { .. })
        ));
    }

    #[test]
    fn test_load_or_seed_installs_default_menu_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let menu = store.load_or_seed().unwrap();
        assert_eq!(menu.len(), 8);
        assert_eq!(menu["Veg Burger"], Money::new(dec!(80)));
        assert!(store.path().exists());

        // A later edit survives the next load_or_seed.
        store.remove_item("Veg Burger").unwrap();
        store.update_item("Cold Coffee", Money::new(dec!(95))).unwrap();
        let menu = store.load_or_seed().unwrap();
        assert_eq!(menu.len(), 7);
        assert_eq!(menu["Cold Coffee"], Money::new(dec!(95)));
    }

    #[test]
    fn test_add_item_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_item("Lassi", Money::new(dec!(60))).unwrap();
        assert!(matches!(
            store.add_item("Lassi", Money::new(dec!(65))),
            Err(StoreError::DuplicateItem(name)) if name == "Lassi"
        ));

        assert_eq!(store.load().unwrap()["Lassi"], Money::new(dec!(60)));
    }

    #[test]
    fn test_update_and_remove_require_existing_item() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.update_item("Ghost", Money::new(dec!(1))),
            Err(StoreError::ItemNotFound(_))
        ));
        assert!(matches!(
            store.remove_item("Ghost"),
            Err(StoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_add_item_validates_input() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.add_item("   ", Money::new(dec!(10))),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.add_item("Tea", Money::new(dec!(-10))),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_add_item_trims_name() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_item("  Filter Coffee  ", Money::new(dec!(45))).unwrap();
        assert!(store.load().unwrap().contains_key("Filter Coffee"));
    }
}
