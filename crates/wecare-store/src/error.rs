//! # Storage Error Types
//!
//! Error types for catalog file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / read / write products.txt)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← code + message, exit status 2                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed lines are not errors: they are skipped and logged. Invoice
//! write failures are not errors either: they surface as
//! `CoreError::PersistenceFailure` inside a successful receipt.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Catalog storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog file does not exist.
    #[error("Catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing the catalog file failed.
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Wraps an I/O error, mapping "not found" to [`StoreError::NotFound`].
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
