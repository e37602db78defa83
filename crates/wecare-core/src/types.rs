//! # Domain Types
//!
//! Core domain types used throughout the shop tool.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Catalog      │   │    Product      │   │  InvoiceKind    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Vec<Product>   │──►│  name (key)     │   │  Sale           │       │
//! │  │  insert order   │   │  brand, origin  │   │  Purchase       │       │
//! │  └─────────────────┘   │  quantity       │   └─────────────────┘       │
//! │                        │  cost_price     │                              │
//! │  ┌─────────────────┐   │  selling_price  │                              │
//! │  │    VatRate      │   └─────────────────┘                              │
//! │  │  1300 = 13%     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product is identified by its name under [`crate::matching::names_match`];
//! there is no separate id. `products.txt` has no id column either.

use serde::{Deserialize, Serialize};

use crate::matching::names_match;
use crate::money::Money;
use crate::pricing;

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1300 bps = 13%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a VAT rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Whole-percent label for invoices (`13` for 13%).
    #[inline]
    pub const fn whole_percent(&self) -> u32 {
        self.0 / 100
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, unique within the catalog (ASCII case-insensitive).
    pub name: String,

    pub brand: String,

    /// Units on hand. Never negative after an engine operation.
    pub quantity: i64,

    /// Price paid per unit, in whole rupees.
    pub cost_price: i64,

    /// Price charged per unit, in whole rupees.
    ///
    /// Derived from `cost_price` when the product is created (or loaded);
    /// restocking never changes it.
    pub selling_price: i64,

    /// Country of origin.
    pub origin: String,
}

impl Product {
    /// Creates a product, deriving the selling price from the cost price.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        quantity: i64,
        cost_price: i64,
        origin: impl Into<String>,
    ) -> Self {
        Product {
            name: name.into(),
            brand: brand.into(),
            quantity,
            cost_price,
            selling_price: pricing::selling_price(cost_price),
            origin: origin.into(),
        }
    }

    /// Returns the cost price as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_major(self.cost_price)
    }

    /// Returns the selling price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_major(self.selling_price)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full in-memory collection of products for the current session.
///
/// Insertion order is preserved: it is the order of `products.txt` and new
/// products are appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Finds a product by name (ASCII case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| names_match(&p.name, name))
    }

    /// Finds a product by name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| names_match(&p.name, name))
    }

    /// Checks whether a product with a matching name exists.
    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Appends a product at the end of the catalog.
    ///
    /// Does not check for duplicates; callers that need the uniqueness
    /// invariant go through the engine or check [`Catalog::contains_name`].
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Catalog {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

// =============================================================================
// Invoice Kind
// =============================================================================

/// Which side of the counter an invoice records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Goods sold to a customer.
    Sale,
    /// Goods bought from a supplier (restock or new product).
    Purchase,
}

impl InvoiceKind {
    /// Banner title printed at the top of the invoice.
    pub const fn title(&self) -> &'static str {
        match self {
            InvoiceKind::Sale => "SALES INVOICE",
            InvoiceKind::Purchase => "PURCHASE INVOICE",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        vec![
            Product::new("Aloe Gel", "Nature", 10, 100, "Nepal"),
            Product::new("Sunscreen", "Sol", 4, 250, "India"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_vat_rate_labels() {
        let rate = VatRate::from_bps(1300);
        assert_eq!(rate.bps(), 1300);
        assert_eq!(rate.whole_percent(), 13);
    }

    #[test]
    fn test_product_new_derives_selling_price() {
        let product = Product::new("Aloe Gel", "Nature", 10, 100, "Nepal");
        assert_eq!(product.selling_price, 200);
        assert_eq!(product.price(), Money::from_major(200));
        assert_eq!(product.cost(), Money::from_major(100));
    }

    #[test]
    fn test_catalog_find_ignores_ascii_case() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find("ALOE GEL").map(|p| p.cost_price), Some(100));
        assert!(catalog.contains_name("sunscreen"));
        assert!(!catalog.contains_name("Sunscreen SPF"));
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let mut catalog = sample_catalog();
        catalog.push(Product::new("Toner", "Rose", 1, 50, "Korea"));

        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Aloe Gel", "Sunscreen", "Toner"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut catalog = sample_catalog();
        if let Some(product) = catalog.find_mut("aloe gel") {
            product.quantity += 5;
        }
        assert_eq!(catalog.find("Aloe Gel").map(|p| p.quantity), Some(15));
    }

    #[test]
    fn test_invoice_kind_titles() {
        assert_eq!(InvoiceKind::Sale.title(), "SALES INVOICE");
        assert_eq!(InvoiceKind::Purchase.title(), "PURCHASE INVOICE");
    }
}
