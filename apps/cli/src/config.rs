//! # Configuration
//!
//! Where the shop's files live and what the shop is called.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--catalog`, `--invoice-dir`, `--shop-name`)
//! 2. Environment variables (`WECARE_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read once at startup and never changes afterwards.

use std::path::PathBuf;

use wecare_core::DEFAULT_SHOP_NAME;

use crate::cli::Cli;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "products.txt";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The flat-file catalog.
    pub catalog_path: PathBuf,

    /// Root of `invoices/` and `purchase_invoices/`.
    pub invoice_root: PathBuf,

    /// Shop name (invoice banners and the catalog table).
    pub shop_name: String,
}

impl Default for AppConfig {
    /// `products.txt` and invoice folders in the working directory.
    fn default() -> Self {
        AppConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            invoice_root: PathBuf::from("."),
            shop_name: DEFAULT_SHOP_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `WECARE_CATALOG`: catalog file
    /// - `WECARE_INVOICE_DIR`: invoice root folder
    /// - `WECARE_SHOP_NAME`: shop name
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("WECARE_CATALOG").filter(|v| !v.trim().is_empty()) {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("WECARE_INVOICE_DIR").filter(|v| !v.trim().is_empty()) {
            config.invoice_root = PathBuf::from(dir);
        }

        if let Some(name) = lookup("WECARE_SHOP_NAME").filter(|v| !v.trim().is_empty()) {
            config.shop_name = name.trim().to_string();
        }

        config
    }

    /// Applies command line flags on top.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.catalog {
            self.catalog_path = path.clone();
        }
        if let Some(dir) = &cli.invoice_dir {
            self.invoice_root = dir.clone();
        }
        if let Some(name) = &cli.shop_name {
            self.shop_name = name.clone();
        }
        self
    }
}
