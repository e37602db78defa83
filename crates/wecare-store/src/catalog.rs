//! # Catalog File
//!
//! Load-all / save-all of `products.txt`.
//!
//! ## Record Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  name, brand, quantity, cost_price, origin        (one product / line) │
//! │                                                                         │
//! │  Aloe Gel,Nature,10,100,Nepal            ✓                             │
//! │   Sunscreen , Sol , 4 , 250 , India      ✓ fields are trimmed          │
//! │  Toner,Rose,12,Korea                     ✗ 4 fields → skipped + warn   │
//! │  Serum,Glow,ten,90,Korea                 ✗ bad quantity → skipped      │
//! │  Bulk,Glow,5,99999999999,Korea           ✗ cost over cap → skipped     │
//! │  ALOE GEL,Other,1,5,Nepal                ✗ duplicate name → skipped    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The selling price is not stored. It is re-derived from the cost price on
//! every load, and `save_all` writes the same five fields back.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use wecare_core::{Catalog, Product, MAX_QUANTITY, MAX_UNIT_PRICE};

use crate::error::{StoreError, StoreResult};

const FIELD_COUNT: usize = 5;

// =============================================================================
// Parsing
// =============================================================================

/// Why a line was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    InvalidNumber { field: &'static str, value: String },
    Negative { field: &'static str, value: i64 },
    OutOfRange { field: &'static str, value: i64, max: i64 },
    DuplicateName(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected {FIELD_COUNT} fields, found {n}"),
            SkipReason::InvalidNumber { field, value } => {
                write!(f, "{field} '{value}' is not a whole number")
            }
            SkipReason::Negative { field, value } => write!(f, "{field} {value} is negative"),
            SkipReason::OutOfRange { field, value, max } => {
                write!(f, "{field} {value} is above the maximum of {max}")
            }
            SkipReason::DuplicateName(name) => write!(f, "duplicate product name '{name}'"),
        }
    }
}

/// A line of `products.txt` that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line_no: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// Result of parsing a catalog file.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

/// Parses the contents of `products.txt`.
///
/// Blank lines are ignored silently; every other rejected line is returned
/// in [`ParsedCatalog::skipped`].
pub fn parse_catalog(text: &str) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_record(line, &parsed.catalog) {
            Ok(product) => parsed.catalog.push(product),
            Err(reason) => parsed.skipped.push(SkippedRecord {
                line_no: idx + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }

    parsed
}

fn parse_record(line: &str, seen: &Catalog) -> Result<Product, SkipReason> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let quantity = parse_number("quantity", fields[2], MAX_QUANTITY)?;
    let cost_price = parse_number("cost price", fields[3], MAX_UNIT_PRICE)?;

    if seen.contains_name(fields[0]) {
        return Err(SkipReason::DuplicateName(fields[0].to_string()));
    }

    Ok(Product::new(
        fields[0], fields[1], quantity, cost_price, fields[4],
    ))
}

fn parse_number(field: &'static str, value: &str, max: i64) -> Result<i64, SkipReason> {
    let number: i64 = value.parse().map_err(|_| SkipReason::InvalidNumber {
        field,
        value: value.to_string(),
    })?;
    if number < 0 {
        return Err(SkipReason::Negative {
            field,
            value: number,
        });
    }
    if number > max {
        return Err(SkipReason::OutOfRange {
            field,
            value: number,
            max,
        });
    }
    Ok(number)
}

/// Formats a catalog in the five-field `products.txt` layout.
pub fn format_catalog(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|p| {
            format!(
                "{},{},{},{},{}\n",
                p.name, p.brand, p.quantity, p.cost_price, p.origin
            )
        })
        .collect()
}

// =============================================================================
// File Store
// =============================================================================

/// `products.txt` on disk.
///
/// ## Usage
/// ```rust,ignore
/// let store = FlatFileCatalog::new("products.txt");
/// let mut catalog = store.load_all()?;
/// // ... engine operations ...
/// store.save_all(&catalog)?;
/// ```
#[derive(Debug, Clone)]
pub struct FlatFileCatalog {
    path: PathBuf,
}

impl FlatFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileCatalog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole catalog, skipping malformed lines with a warning.
    pub fn load_all(&self) -> StoreResult<Catalog> {
        let text = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let parsed = parse_catalog(&text);

        for skipped in &parsed.skipped {
            warn!(
                path = %self.path.display(),
                line_no = skipped.line_no,
                line = %skipped.line,
                reason = %skipped.reason,
                "Skipping invalid catalog line"
            );
        }

        info!(
            path = %self.path.display(),
            products = parsed.catalog.len(),
            skipped = parsed.skipped.len(),
            "Catalog loaded"
        );
        Ok(parsed.catalog)
    }

    /// Rewrites the whole file from the in-memory catalog.
    pub fn save_all(&self, catalog: &Catalog) -> StoreResult<()> {
        fs::write(&self.path, format_catalog(catalog)).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(path = %self.path.display(), products = catalog.len(), "Catalog saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
