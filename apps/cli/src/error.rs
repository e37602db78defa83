//! # CLI Error Type
//!
//! One error type for everything the command interface reports.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the shop tool                          │
//! │                                                                         │
//! │  wecare sell --product "Toner" --quantity 3 --customer Sita             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store error?  ── StoreError::NotFound ──────────┐                      │
//! │         │                                        │                      │
//! │         ▼                                        ▼                      │
//! │  Engine error? ── CoreError::ProductNotFound ── CliError ──► stderr     │
//! │         │                                        │                      │
//! │         ▼                                        ▼                      │
//! │  Success ──► invoice on stdout          exit status (1 or 2)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Status
//! - `0` success (an unsaved invoice is only a warning)
//! - `1` the operation was refused by a business rule or bad input
//! - `2` configuration, catalog file or terminal failure

use std::io;
use std::process::ExitCode;

use thiserror::Error;
use wecare_core::{CoreError, ValidationError};
use wecare_store::StoreError;

/// Error reported by the command interface.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for the command interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No product matches the given name
    NotFound,

    /// A product with the same name already exists
    Duplicate,

    /// Not enough units on hand
    InsufficientStock,

    /// Input validation failed
    ValidationError,

    /// The catalog file is missing, unreadable or empty
    CatalogError,

    /// Terminal or other I/O failure
    Io,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub const fn exit_status(self) -> u8 {
        match self {
            ErrorCode::NotFound
            | ErrorCode::Duplicate
            | ErrorCode::InsufficientStock
            | ErrorCode::ValidationError => 1,
            ErrorCode::CatalogError | ErrorCode::Io => 2,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// The catalog loaded but holds no products.
    pub fn empty_catalog() -> Self {
        CliError::new(
            ErrorCode::CatalogError,
            "No products found. Kindly check the products.txt file.",
        )
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code.exit_status())
    }
}

/// Result type for command interface operations.
pub type CliResult<T> = Result<T, CliError>;

/// Converts engine errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::DuplicateProduct(_) => ErrorCode::Duplicate,
            CoreError::InsufficientStock { .. } | CoreError::InsufficientStockForFreeItems { .. } => {
                ErrorCode::InsufficientStock
            }
            CoreError::InvalidQuantity { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
            // only ever carried as a receipt warning; mapped for completeness
            CoreError::PersistenceFailure { .. } => ErrorCode::Io,
        };
        CliError::new(code, err.to_string())
    }
}

/// Converts storage errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        if let StoreError::Io { source, .. } = &err {
            tracing::error!(error = %source, "Catalog I/O failed");
        }
        CliError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::from(CoreError::from(err))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::new(ErrorCode::Io, format!("Terminal I/O failed: {err}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::new(ErrorCode::Io, format!("Could not encode JSON: {err}"))
    }
}
