//! # Receipt Store
//!
//! Writes rendered receipt text into the bills directory, one file per
//! bill, named deterministically from the bill number:
//!
//! ```text
//! bills/
//! ├── bill_202401011234.txt
//! ├── bill_202401015678.txt
//! └── ...
//! ```
//!
//! The directory is created on first save. Bill numbers are best-effort
//! unique (date + random suffix), so a same-day suffix collision overwrites
//! the earlier file; that trade-off is inherited from the numbering scheme
//! and left as-is.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Default location of the bills directory, relative to the working
/// directory.
pub const DEFAULT_BILLS_DIR: &str = "bills";

/// Repository for stored receipt files.
///
/// ## Usage
/// ```rust,ignore
/// let store = ReceiptStore::new("bills");
/// let path = store.save("202401011234", &receipt_text)?;
/// let text = store.load("202401011234")?;
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    dir: PathBuf,
}

impl ReceiptStore {
    /// Creates a store backed by the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptStore { dir: dir.into() }
    }

    /// Returns the bills directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file path a bill number maps to.
    pub fn path_for(&self, bill_no: &str) -> PathBuf {
        self.dir.join(format!("bill_{bill_no}.txt"))
    }

    /// Checks whether a receipt is stored for the bill number.
    pub fn exists(&self, bill_no: &str) -> bool {
        self.path_for(bill_no).exists()
    }

    /// Writes the receipt text, creating the directory if absent.
    ///
    /// Returns the path written. An existing file for the same bill number
    /// is overwritten.
    pub fn save(&self, bill_no: &str, text: &str) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let path = self.path_for(bill_no);
        fs::write(&path, text).map_err(|e| StoreError::io(&path, e))?;

        debug!(path = %path.display(), "receipt saved");
        Ok(path)
    }

    /// Reads back the receipt text for a bill number.
    pub fn load(&self, bill_no: &str) -> StoreResult<String> {
        let path = self.path_for(bill_no);
        if !path.exists() {
            return Err(StoreError::ReceiptNotFound(bill_no.to_string()));
        }

        fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ReceiptStore {
        ReceiptStore::new(dir.path().join("bills"))
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.dir().exists());

        let path = store.save("202401011234", "receipt body").unwrap();

        assert!(store.dir().is_dir());
        assert_eq!(path, store.dir().join("bill_202401011234.txt"));
        assert!(store.exists("202401011234"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("202401011234", "Thank you! Visit again.").unwrap();
        assert_eq!(store.load("202401011234").unwrap(), "Thank you! Visit again.");
    }

    #[test]
    fn test_collision_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("202401011234", "first").unwrap();
        store.save("202401011234", "second").unwrap();

        assert_eq!(store.load("202401011234").unwrap(), "second");
    }

    #[test]
    fn test_load_missing_receipt_is_typed_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.load("209912319999"),
            Err(StoreError::ReceiptNotFound(no)) if no == "209912319999"
        ));
    }
}
