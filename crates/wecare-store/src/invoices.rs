//! # Invoice Files
//!
//! Directory-backed [`InvoiceSink`]: one text file per invoice.
//!
//! ```text
//! <root>/
//! ├── invoices/
//! │   └── invoice_20240307090502.txt                 (InvoiceKind::Sale)
//! └── purchase_invoices/
//!     └── purchase_invoice_20240307091500.txt        (InvoiceKind::Purchase)
//! ```
//!
//! Two invoices of the same kind issued within one second share a number;
//! the later one overwrites the earlier file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wecare_core::{CoreError, CoreResult, InvoiceKind, InvoiceSink};

/// Writes invoices below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryInvoiceSink {
    root: PathBuf,
}

impl DirectoryInvoiceSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryInvoiceSink { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding invoices of `kind`.
    pub fn folder(&self, kind: InvoiceKind) -> PathBuf {
        self.root.join(folder_name(kind))
    }

    /// Full path of the file for invoice `number`.
    pub fn invoice_path(&self, kind: InvoiceKind, number: &str) -> PathBuf {
        self.folder(kind).join(file_name(kind, number))
    }
}

fn folder_name(kind: InvoiceKind) -> &'static str {
    match kind {
        InvoiceKind::Sale => "invoices",
        InvoiceKind::Purchase => "purchase_invoices",
    }
}

fn file_name(kind: InvoiceKind, number: &str) -> String {
    match kind {
        InvoiceKind::Sale => format!("invoice_{number}.txt"),
        InvoiceKind::Purchase => format!("purchase_invoice_{number}.txt"),
    }
}

impl InvoiceSink for DirectoryInvoiceSink {
    fn store(&mut self, kind: InvoiceKind, number: &str, rendered: &str) -> CoreResult<String> {
        let folder = self.folder(kind);
        if let Err(err) = fs::create_dir_all(&folder) {
            // the write below reports the real failure
            warn!(folder = %folder.display(), error = %err, "Could not create invoice folder");
        }

        let path = folder.join(file_name(kind, number));
        fs::write(&path, rendered).map_err(|err| CoreError::PersistenceFailure {
            target: path.display().to_string(),
            reason: err.to_string(),
        })?;

        debug!(path = %path.display(), "Invoice written");
        Ok(path.display().to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
