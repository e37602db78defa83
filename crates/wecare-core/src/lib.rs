//! # wecare-core: Pure Business Logic for the WeCare Shop Tool
//!
//! This crate is the **heart** of the shop tool. It holds every rule that
//! changes stock or money, with zero file-system access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        WeCare Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Command Interface (apps/cli)                    │   │
//! │  │     menu ──► prompts ──► validation ──► engine call             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wecare-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ matching │ │ pricing  │ │numbering │ │     engine       │  │   │
//! │  │   │ names    │ │ markup   │ │ invoice  │ │ sell / restock   │  │   │
//! │  │   │          │ │ VAT      │ │ numbers  │ │ add product      │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO TERMINAL • NO ENVIRONMENT                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InvoiceSink trait                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 wecare-store (Storage Layer)                    │   │
//! │  │          products.txt, invoices/, purchase_invoices/            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Catalog, VatRate, InvoiceKind
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`matching`] - ASCII case-insensitive product name matching
//! - [`pricing`] - Markup, buy-3-get-1 promotion, VAT breakdown
//! - [`numbering`] - Invoice numbers, supplier VAT ids, clocks
//! - [`invoice`] - Sales/purchase invoice model and text rendering
//! - [`engine`] - Sell / Restock / AddProduct operations
//! - [`validation`] - Input validation for the command interface
//! - [`display`] - Tabular catalog listing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wecare_core::money::Money;
//! use wecare_core::pricing::{free_items, vat_breakdown};
//!
//! // Buy 3 get 1 free
//! assert_eq!(free_items(9), 3);
//!
//! // 13% VAT on Rs. 100
//! let vat = vat_breakdown(Money::from_major(100));
//! assert_eq!(vat.vat, Money::from_major(13));
//! assert_eq!(vat.total, Money::from_major(113));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod engine;
pub mod error;
pub mod invoice;
pub mod matching;
pub mod money;
pub mod numbering;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{InventoryEngine, InvoiceSink, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, Party};
pub use matching::names_match;
pub use money::Money;
pub use numbering::{Clock, FixedClock, SystemClock};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shop name printed on invoices and the catalog listing.
pub const DEFAULT_SHOP_NAME: &str = "WeCare Skin Care Products";

/// VAT registration number of the shop, printed on every sales invoice.
pub const SHOP_VAT_NUMBER: &str = "NP12345678";

/// Fixed VAT rate: 13%.
pub const VAT_RATE: VatRate = VatRate::from_bps(1300);

/// Largest quantity accepted in a single sale, restock or new product.
///
/// Keeps `price × quantity` far away from `i64` overflow.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest cost price (whole rupees) accepted for a new product.
pub const MAX_UNIT_PRICE: i64 = 10_000_000;
