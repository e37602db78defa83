//! # Inventory Engine
//!
//! Applies Sell / Restock / AddProduct to a catalog and issues the invoice
//! for each successful operation.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell(catalog, "aloe gel", 6, "Sita")                                   │
//! │       │                                                                 │
//! │       ├── product found (names_match)?       no → ProductNotFound       │
//! │       ├── quantity in 1..=MAX_QUANTITY?     no → InvalidQuantity        │
//! │       ├── stock ≥ 6?                         no → InsufficientStock     │
//! │       ├── stock ≥ 6 + free_items(6) = 8?     no → ...ForFreeItems       │
//! │       │                                                                 │
//! │       ▼   (every check passed, nothing mutated yet)                     │
//! │  stock -= 8 ──► invoice ──► InvoiceSink::store ──► Receipt              │
//! │                                   │                                     │
//! │                                   └── Err → Receipt.warning (stock      │
//! │                                             change is kept)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Restock also refuses to push stock past `MAX_QUANTITY`, and AddProduct
//! refuses text the catalog file cannot hold (see
//! [`validate_catalog_field`]).
//!
//! The catalog is borrowed mutably for the duration of one call; there is no
//! global catalog. Callers persist the catalog only when an operation
//! returns `Ok`.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::invoice::Invoice;
use crate::numbering::{invoice_number, supplier_vat_id, Clock, SystemClock};
use crate::pricing::{free_items, vat_breakdown};
use crate::types::{Catalog, InvoiceKind, Product};
use crate::validation::validate_catalog_field;
use crate::{DEFAULT_SHOP_NAME, MAX_QUANTITY, MAX_UNIT_PRICE};

// =============================================================================
// Invoice Sink
// =============================================================================

/// Destination for rendered invoices.
///
/// Implementations attempt to persist `rendered` under an identifier
/// derived from `kind` and `number`, and return a human-readable location.
/// A failure is reported as [`CoreError::PersistenceFailure`] and never
/// undoes the inventory change that produced the invoice.
pub trait InvoiceSink {
    fn store(&mut self, kind: InvoiceKind, number: &str, rendered: &str) -> CoreResult<String>;
}

impl<S: InvoiceSink + ?Sized> InvoiceSink for &mut S {
    fn store(&mut self, kind: InvoiceKind, number: &str, rendered: &str) -> CoreResult<String> {
        (**self).store(kind, number, rendered)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Outcome of a successful engine operation.
#[derive(Debug)]
pub struct Receipt {
    pub invoice: Invoice,
    /// `invoice.render()`, kept so callers can print exactly what was filed.
    pub rendered: String,
    /// Where the sink stored the invoice, when it succeeded.
    pub stored_at: Option<String>,
    /// Sink failure, when it did not.
    pub warning: Option<CoreError>,
}

impl Receipt {
    pub fn is_stored(&self) -> bool {
        self.stored_at.is_some()
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Applies inventory operations and hands invoices to a sink.
#[derive(Debug)]
pub struct InventoryEngine<S, C = SystemClock> {
    sink: S,
    clock: C,
    shop_name: String,
}

impl<S: InvoiceSink> InventoryEngine<S, SystemClock> {
    /// Creates an engine reading the local wall clock.
    pub fn new(sink: S) -> Self {
        InventoryEngine::with_clock(sink, SystemClock)
    }
}

impl<S: InvoiceSink, C: Clock> InventoryEngine<S, C> {
    /// Creates an engine with an explicit clock.
    pub fn with_clock(sink: S, clock: C) -> Self {
        InventoryEngine {
            sink,
            clock,
            shop_name: DEFAULT_SHOP_NAME.to_string(),
        }
    }

    /// Overrides the shop name printed on invoices.
    pub fn shop_name(mut self, name: impl Into<String>) -> Self {
        self.shop_name = name.into();
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sells `quantity` units of `name` to `customer`, applying buy-3-get-1.
    ///
    /// `quantity + free_items(quantity)` units leave the shelf; only
    /// `quantity` are charged.
    pub fn sell(
        &mut self,
        catalog: &mut Catalog,
        name: &str,
        quantity: i64,
        customer: &str,
    ) -> CoreResult<Receipt> {
        let product = catalog
            .find_mut(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;
        check_quantity("quantity", quantity, MAX_QUANTITY)?;
        debug!(product = %product.name, stock = product.quantity, quantity, "Selling product");

        let free = free_items(quantity);
        let total_items = quantity + free;

        if product.quantity < quantity {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }
        if product.quantity < total_items {
            return Err(CoreError::InsufficientStockForFreeItems {
                name: product.name.clone(),
                available: product.quantity,
                required: total_items,
            });
        }

        let subtotal = product.price().multiply_quantity(quantity);
        product.quantity -= total_items;

        let now = self.clock.now();
        let invoice = Invoice::sale(
            &self.shop_name,
            invoice_number(&now),
            now,
            customer,
            product,
            quantity,
            free,
            vat_breakdown(subtotal),
        );

        info!(
            product = %product.name,
            sold = quantity,
            free,
            remaining = product.quantity,
            invoice = %invoice.number,
            "Sale completed"
        );

        Ok(self.emit(invoice))
    }

    /// Adds `quantity` units of an existing product bought from `supplier`.
    ///
    /// The selling price is left as it is. Stock never exceeds
    /// `MAX_QUANTITY`; a larger restock fails with the room left as `max`.
    pub fn restock(
        &mut self,
        catalog: &mut Catalog,
        name: &str,
        quantity: i64,
        supplier: &str,
    ) -> CoreResult<Receipt> {
        let product = catalog
            .find_mut(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;
        check_quantity("quantity", quantity, MAX_QUANTITY)?;

        let room = MAX_QUANTITY.saturating_sub(product.quantity).max(0);
        let stock = product
            .quantity
            .checked_add(quantity)
            .filter(|stock| *stock <= MAX_QUANTITY)
            .ok_or(CoreError::InvalidQuantity {
                field: "quantity",
                value: quantity,
                max: room,
            })?;

        product.quantity = stock;
        let subtotal = product.cost().multiply_quantity(quantity);

        let now = self.clock.now();
        let invoice = Invoice::purchase(
            &self.shop_name,
            invoice_number(&now),
            now,
            supplier,
            supplier_vat_id(&now),
            product,
            quantity,
            vat_breakdown(subtotal),
        );

        info!(
            product = %product.name,
            added = quantity,
            stock = product.quantity,
            invoice = %invoice.number,
            "Restock completed"
        );

        Ok(self.emit(invoice))
    }

    /// Appends a new product bought from `supplier`.
    ///
    /// Fails with [`CoreError::DuplicateProduct`] when any existing product
    /// matches `name`. Name, brand and origin are stored trimmed.
    #[allow(clippy::too_many_arguments)]
    pub fn add_product(
        &mut self,
        catalog: &mut Catalog,
        name: &str,
        brand: &str,
        quantity: i64,
        cost_price: i64,
        origin: &str,
        supplier: &str,
    ) -> CoreResult<Receipt> {
        let name = validate_catalog_field("Product name", name)?;
        if let Some(existing) = catalog.find(&name) {
            return Err(CoreError::DuplicateProduct(existing.name.clone()));
        }

        let brand = validate_catalog_field("Brand name", brand)?;
        let origin = validate_catalog_field("Country of origin", origin)?;
        check_quantity("quantity", quantity, MAX_QUANTITY)?;
        check_quantity("cost price", cost_price, MAX_UNIT_PRICE)?;

        let product = Product::new(name, brand, quantity, cost_price, origin);
        let subtotal = product.cost().multiply_quantity(quantity);

        let now = self.clock.now();
        let invoice = Invoice::purchase(
            &self.shop_name,
            invoice_number(&now),
            now,
            supplier,
            supplier_vat_id(&now),
            &product,
            quantity,
            vat_breakdown(subtotal),
        );

        info!(
            product = %product.name,
            quantity,
            cost_price,
            selling_price = product.selling_price,
            invoice = %invoice.number,
            "Product added"
        );
        catalog.push(product);

        Ok(self.emit(invoice))
    }

    /// Renders the invoice and offers it to the sink.
    fn emit(&mut self, invoice: Invoice) -> Receipt {
        let rendered = invoice.render();

        match self.sink.store(invoice.kind, &invoice.number, &rendered) {
            Ok(location) => {
                debug!(invoice = %invoice.number, %location, "Invoice stored");
                Receipt {
                    invoice,
                    rendered,
                    stored_at: Some(location),
                    warning: None,
                }
            }
            Err(err) => {
                warn!(invoice = %invoice.number, error = %err, "Invoice not stored");
                Receipt {
                    invoice,
                    rendered,
                    stored_at: None,
                    warning: Some(err),
                }
            }
        }
    }
}

fn check_quantity(field: &'static str, value: i64, max: i64) -> CoreResult<()> {
    if value <= 0 || value > max {
        return Err(CoreError::InvalidQuantity { field, value, max });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
