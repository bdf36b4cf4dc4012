//! # Store Error Types
//!
//! Error types for menu and receipt persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the path / item / bill context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Front end displays a user-facing message                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Persistence errors for the menu file and the bills directory.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The menu file exists but does not parse as a name → price mapping.
    #[error("menu file {path} is malformed: {source}")]
    MalformedMenu {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the menu for writing failed.
    #[error("failed to encode menu: {0}")]
    Encode(#[source] serde_json::Error),

    /// Adding an item whose name is already on the menu.
    #[error("menu item '{0}' already exists")]
    DuplicateItem(String),

    /// Updating or removing an item that is not on the menu.
    #[error("menu item '{0}' not found")]
    ItemNotFound(String),

    /// Loading a receipt that was never stored.
    #[error("receipt for bill {0} not found")]
    ReceiptNotFound(String),

    /// Invalid item name or price at the store boundary.
    #[error(transparent)]
    Validation(#[from] bistro_core::ValidationError),
}

impl StoreError {
    /// Creates an Io error carrying the offending path.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
