//! # bistro-store: Persistence Layer for Bistro POS
//!
//! This crate provides the two storage collaborators the billing core
//! depends on its callers for:
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro POS Data Flow                             │
//! │                                                                         │
//! │  Front end (apps/till)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bistro-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────┐         ┌───────────────────┐          │   │
//! │  │   │    MenuStore      │         │   ReceiptStore    │          │   │
//! │  │   │   (menu.rs)       │         │  (receipts.rs)    │          │   │
//! │  │   │                   │         │                   │          │   │
//! │  │   │ menu.json         │         │ bills/            │          │   │
//! │  │   │ name → price      │         │ bill_<no>.txt     │          │   │
//! │  │   └───────────────────┘         └───────────────────┘          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Filesystem (working directory by default, paths configurable)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`menu`] - Menu file load/save and item edits
//! - [`receipts`] - Receipt file storage
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod receipts;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use menu::{default_menu, MenuStore, DEFAULT_MENU_FILE};
pub use receipts::{ReceiptStore, DEFAULT_BILLS_DIR};
