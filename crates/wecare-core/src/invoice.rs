//! # Invoices
//!
//! Sales and purchase invoices, and the text layout they are printed and
//! filed in.
//!
//! ## Snapshot Pattern
//! An invoice copies the product's name, brand, origin and unit price at
//! the moment of the transaction. Nothing in the invoice points back into
//! the catalog, so later restocks or edits never change an issued invoice.
//!
//! ## Layout (sales)
//! ```text
//! === WeCare Skin Care Products ===
//!         SALES INVOICE
//! ==============================
//!
//! Invoice No: 20240307090502
//! Date: 2024-03-07 09:05:02
//! VAT No: NP12345678
//! Customer Name: Sita
//! ...
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::money::Money;
use crate::numbering::invoice_date;
use crate::pricing::VatBreakdown;
use crate::types::{InvoiceKind, Product};
use crate::SHOP_VAT_NUMBER;

const RULE: &str = "==============================";
const THIN_RULE: &str = "------------------------------";

// =============================================================================
// Invoice Parts
// =============================================================================

/// The other side of the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Party {
    Customer { name: String },
    Supplier { name: String, vat_id: String },
}

impl Party {
    pub fn name(&self) -> &str {
        match self {
            Party::Customer { name } | Party::Supplier { name, .. } => name,
        }
    }
}

/// Frozen product details plus the quantities of the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Product name at time of transaction (frozen).
    pub name: String,
    pub brand: String,
    pub origin: String,
    /// Paid (sales) or purchased (purchases) units.
    pub quantity: i64,
    /// Promotional units handed over at no charge. Always 0 on purchases.
    pub free_items: i64,
    /// Selling price (sales) or cost price (purchases) per unit.
    pub unit_price: Money,
}

impl InvoiceItem {
    fn snapshot(product: &Product, quantity: i64, free_items: i64, unit_price: Money) -> Self {
        InvoiceItem {
            name: product.name.clone(),
            brand: product.brand.clone(),
            origin: product.origin.clone(),
            quantity,
            free_items,
            unit_price,
        }
    }

    /// Units leaving (or entering) the shelf.
    pub fn total_items(&self) -> i64 {
        self.quantity + self.free_items
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A generated record of one sale or purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub kind: InvoiceKind,
    pub number: String,
    pub issued_at: NaiveDateTime,
    pub shop_name: String,
    pub party: Party,
    pub item: InvoiceItem,
    pub amounts: VatBreakdown,
}

impl Invoice {
    /// Builds a sales invoice for `quantity` paid units plus `free_items`.
    #[allow(clippy::too_many_arguments)]
    pub fn sale(
        shop_name: &str,
        number: String,
        issued_at: NaiveDateTime,
        customer: &str,
        product: &Product,
        quantity: i64,
        free_items: i64,
        amounts: VatBreakdown,
    ) -> Self {
        Invoice {
            kind: InvoiceKind::Sale,
            number,
            issued_at,
            shop_name: shop_name.to_string(),
            party: Party::Customer {
                name: customer.to_string(),
            },
            item: InvoiceItem::snapshot(product, quantity, free_items, product.price()),
            amounts,
        }
    }

    /// Builds a purchase invoice for `quantity` units bought at cost.
    #[allow(clippy::too_many_arguments)]
    pub fn purchase(
        shop_name: &str,
        number: String,
        issued_at: NaiveDateTime,
        supplier: &str,
        supplier_vat_id: String,
        product: &Product,
        quantity: i64,
        amounts: VatBreakdown,
    ) -> Self {
        Invoice {
            kind: InvoiceKind::Purchase,
            number,
            issued_at,
            shop_name: shop_name.to_string(),
            party: Party::Supplier {
                name: supplier.to_string(),
                vat_id: supplier_vat_id,
            },
            item: InvoiceItem::snapshot(product, quantity, 0, product.cost()),
            amounts,
        }
    }

    /// Whether the buy-3-get-1 note belongs on this invoice.
    pub fn promotion_applied(&self) -> bool {
        self.kind == InvoiceKind::Sale && self.item.free_items > 0
    }

    /// Renders the invoice as printable text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        let item = &self.item;
        let amounts = &self.amounts;

        writeln!(out)?;
        writeln!(out, "=== {} ===", self.shop_name)?;
        writeln!(out, "        {}", self.kind.title())?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        writeln!(out, "Invoice No: {}", self.number)?;
        writeln!(out, "Date: {}", invoice_date(&self.issued_at))?;

        match &self.party {
            Party::Customer { name } => {
                writeln!(out, "VAT No: {SHOP_VAT_NUMBER}")?;
                writeln!(out, "Customer Name: {name}")?;
            }
            Party::Supplier { name, vat_id } => {
                writeln!(out, "Supplier: {name}")?;
                writeln!(out, "Supplier VAT No: {vat_id}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Product Details:")?;
        writeln!(out, "  Name: {}", item.name)?;
        writeln!(out, "  Brand: {}", item.brand)?;
        writeln!(out, "  Origin: {}", item.origin)?;

        match self.kind {
            InvoiceKind::Sale => {
                writeln!(out, "  Quantity Purchased: {}", item.quantity)?;
                writeln!(out, "  Free Items: {}", item.free_items)?;
                writeln!(out, "  Total Items: {}", item.total_items())?;
                writeln!(out, "  Price per item: {}", item.unit_price)?;
            }
            InvoiceKind::Purchase => {
                writeln!(out, "  Quantity: {}", item.quantity)?;
                writeln!(out, "  Cost per item: {}", item.unit_price)?;
            }
        }

        writeln!(out, "{THIN_RULE}")?;
        writeln!(out, "Subtotal: {}", amounts.subtotal)?;
        writeln!(
            out,
            "VAT ({}%): {}",
            amounts.rate.whole_percent(),
            amounts.vat
        )?;
        writeln!(out, "Total Amount: {}", amounts.total)?;
        writeln!(out)?;

        if self.promotion_applied() {
            writeln!(out, "*** Buy 3 Get 1 Free Applied! ***")?;
        }
        if self.kind == InvoiceKind::Sale {
            writeln!(out, "Thank you for choosing {}!", self.shop_name)?;
        }
        writeln!(out, "{RULE}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
