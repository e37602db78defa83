//! # wecare-store: Storage Layer for the WeCare Shop Tool
//!
//! This crate reads and writes the shop's plain-text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        WeCare Data Flow                                 │
//! │                                                                         │
//! │  Command Interface (start-up, after each successful operation)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   wecare-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐         ┌──────────────────────────┐  │   │
//! │  │   │  FlatFileCatalog   │         │  DirectoryInvoiceSink    │  │   │
//! │  │   │  (catalog.rs)      │         │  (invoices.rs)           │  │   │
//! │  │   │  load_all()        │         │  impl InvoiceSink        │  │   │
//! │  │   │  save_all()        │         │                          │  │   │
//! │  │   └─────────┬──────────┘         └────────────┬─────────────┘  │   │
//! │  └─────────────┼─────────────────────────────────┼────────────────┘   │
//! │                ▼                                 ▼                      │
//! │         products.txt             invoices/invoice_<n>.txt               │
//! │                                  purchase_invoices/purchase_invoice_<n> │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - `products.txt` parsing, formatting, load and save
//! - [`invoices`] - Invoice files, one folder per invoice kind
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wecare_store::{DirectoryInvoiceSink, FlatFileCatalog};
//! use wecare_core::InventoryEngine;
//!
//! let store = FlatFileCatalog::new("products.txt");
//! let mut catalog = store.load_all()?;
//!
//! let mut engine = InventoryEngine::new(DirectoryInvoiceSink::new("."));
//! engine.sell(&mut catalog, "aloe gel", 3, "Sita")?;
//! store.save_all(&catalog)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod invoices;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{
    format_catalog, parse_catalog, FlatFileCatalog, ParsedCatalog, SkipReason, SkippedRecord,
};
pub use error::{StoreError, StoreResult};
pub use invoices::DirectoryInvoiceSink;
