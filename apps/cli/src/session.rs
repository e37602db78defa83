//! # Session
//!
//! The in-memory catalog, the file it came from, and the engine that
//! changes it. Shared by the menu and the one-shot commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session::open(config)                                                  │
//! │     products.txt ──load_all──► Catalog                                  │
//! │                                                                         │
//! │  session.sell(..) / restock(..) / add_product(..)                       │
//! │     engine op ──Ok──► save_all(products.txt) ──► Receipt                │
//! │               └─Err─► catalog untouched, nothing saved                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use tracing::info;
use wecare_core::{
    Catalog, Clock, InventoryEngine, InvoiceKind, InvoiceSink, Receipt, SystemClock,
};
use wecare_store::{DirectoryInvoiceSink, FlatFileCatalog};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Catalog + store + engine for one process run.
#[derive(Debug)]
pub struct Session<S = DirectoryInvoiceSink, C = SystemClock> {
    store: FlatFileCatalog,
    catalog: Catalog,
    engine: InventoryEngine<S, C>,
    shop_name: String,
}

impl Session {
    /// Loads the catalog and points the engine at the invoice folders.
    pub fn open(config: &AppConfig) -> CliResult<Self> {
        let store = FlatFileCatalog::new(&config.catalog_path);
        let catalog = store.load_all()?;
        let engine = InventoryEngine::new(DirectoryInvoiceSink::new(&config.invoice_root))
            .shop_name(config.shop_name.as_str());

        info!(
            catalog = %config.catalog_path.display(),
            invoices = %config.invoice_root.display(),
            products = catalog.len(),
            "Session opened"
        );
        Ok(Session::new(store, catalog, engine, config.shop_name.clone()))
    }
}

impl<S: InvoiceSink, C: Clock> Session<S, C> {
    pub fn new(
        store: FlatFileCatalog,
        catalog: Catalog,
        engine: InventoryEngine<S, C>,
        shop_name: String,
    ) -> Self {
        Session {
            store,
            catalog,
            engine,
            shop_name,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn sell(&mut self, product: &str, quantity: i64, customer: &str) -> CliResult<Receipt> {
        let receipt = self
            .engine
            .sell(&mut self.catalog, product, quantity, customer)?;
        self.persist()?;
        Ok(receipt)
    }

    pub fn restock(&mut self, product: &str, quantity: i64, supplier: &str) -> CliResult<Receipt> {
        let receipt = self
            .engine
            .restock(&mut self.catalog, product, quantity, supplier)?;
        self.persist()?;
        Ok(receipt)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_product(
        &mut self,
        product: &str,
        brand: &str,
        quantity: i64,
        cost_price: i64,
        origin: &str,
        supplier: &str,
    ) -> CliResult<Receipt> {
        let receipt = self.engine.add_product(
            &mut self.catalog,
            product,
            brand,
            quantity,
            cost_price,
            origin,
            supplier,
        )?;
        self.persist()?;
        Ok(receipt)
    }

    fn persist(&self) -> CliResult<()> {
        self.store.save_all(&self.catalog)?;
        Ok(())
    }
}

/// Prints the invoice, or the sink warning followed by the invoice.
pub fn write_receipt(out: &mut impl Write, receipt: &Receipt) -> io::Result<()> {
    let label = match receipt.invoice.kind {
        InvoiceKind::Sale => "Invoice",
        InvoiceKind::Purchase => "Purchase invoice",
    };

    match &receipt.stored_at {
        Some(location) => {
            writeln!(out, "\n{label} generated successfully!")?;
            writeln!(out, "{}", receipt.rendered)?;
            writeln!(out, "Invoice saved as: {location}")?;
        }
        None => {
            writeln!(out, "\nWarning: Could not save {} to file.", label.to_lowercase())?;
            if let Some(warning) = &receipt.warning {
                writeln!(out, "{warning}")?;
            }
            writeln!(out, "\n{label} details:")?;
            writeln!(out, "{}", receipt.rendered)?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use wecare_core::FixedClock;

    pub(crate) const SAMPLE: &str = "Aloe Gel,Nature,10,100,Nepal\nSunscreen,Sol,4,250,India\n";

    pub(crate) fn fixed_clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 7)
                .and_then(|d| d.and_hms_opt(9, 5, 2))
                .unwrap(),
        )
    }

    /// Session over `SAMPLE` in a scratch folder, clock frozen.
    pub(crate) fn scratch_session(
        dir: &Path,
    ) -> Session<DirectoryInvoiceSink, FixedClock> {
        let path = dir.join("products.txt");
        fs::write(&path, SAMPLE).unwrap();
        let store = FlatFileCatalog::new(&path);
        let catalog = store.load_all().unwrap();
        let engine = InventoryEngine::with_clock(DirectoryInvoiceSink::new(dir), fixed_clock());
        Session::new(store, catalog, engine, "WeCare Skin Care Products".to_string())
    }

    #[test]
    fn test_sell_persists_catalog_and_invoice() {
        let dir = TempDir::new().unwrap();
        let mut session = scratch_session(dir.path());

        let receipt = session.sell("aloe gel", 3, "Sita").unwrap();

        assert!(receipt.is_stored());
        assert_eq!(session.catalog().find("Aloe Gel").unwrap().quantity, 6);
        let saved = fs::read_to_string(dir.path().join("products.txt")).unwrap();
        assert!(saved.starts_with("Aloe Gel,Nature,6,100,Nepal\n"));
        assert!(dir
            .path()
            .join("invoices")
            .join("invoice_20240307090502.txt")
            .exists());
    }

    #[test]
    fn test_failed_operation_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = scratch_session(dir.path());

        let err = session.sell("Toner", 1, "Sita").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        let saved = fs::read_to_string(dir.path().join("products.txt")).unwrap();
        assert_eq!(saved, SAMPLE);
        assert!(!dir.path().join("invoices").exists());
    }

    #[test]
    fn test_add_product_appends_line() {
        let dir = TempDir::new().unwrap();
        let mut session = scratch_session(dir.path());

        session
            .add_product("Toner", "Rose", 12, 80, "Korea", "Glow Traders")
            .unwrap();

        let saved = fs::read_to_string(dir.path().join("products.txt")).unwrap();
        assert!(saved.ends_with("Toner,Rose,12,80,Korea\n"));
        assert!(dir
            .path()
            .join("purchase_invoices")
            .join("purchase_invoice_20240307090502.txt")
            .exists());
    }

    #[test]
    fn test_added_product_survives_reload() {
        let dir = TempDir::new().unwrap();
        let mut session = scratch_session(dir.path());

        session
            .add_product(" Rose Toner ", "Glow & Co", 12, 80, "South Korea", "Glow, Ltd")
            .unwrap();
        let err = session
            .add_product("Toner, Pink", "Rose", 1, 10, "Korea", "Acme")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let reloaded = FlatFileCatalog::new(dir.path().join("products.txt"))
            .load_all()
            .unwrap();
        assert_eq!(&reloaded, session.catalog());
        let toner = reloaded.find("rose toner").unwrap();
        assert_eq!(toner.name, "Rose Toner");
        assert_eq!(toner.brand, "Glow & Co");
        assert_eq!(toner.origin, "South Korea");
        assert_eq!(toner.selling_price, 160);
    }

    #[test]
    fn test_write_receipt_success_and_warning() {
        let dir = TempDir::new().unwrap();
        let mut session = scratch_session(dir.path());
        let mut receipt = session.restock("Sunscreen", 2, "Sol Traders").unwrap();

        let mut out = Vec::new();
        write_receipt(&mut out, &receipt).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Purchase invoice generated successfully!"));
        assert!(text.contains("Invoice saved as: "));

        receipt.stored_at = None;
        receipt.warning = Some(wecare_core::CoreError::PersistenceFailure {
            target: "purchase_invoices".into(),
            reason: "read-only".into(),
        });
        let mut out = Vec::new();
        write_receipt(&mut out, &receipt).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Warning: Could not save purchase invoice to file."));
        assert!(text.contains("Purchase invoice details:"));
        assert!(text.contains(&receipt.rendered));
    }
}
