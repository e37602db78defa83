//! # Error Types
//!
//! Domain-specific error types for wecare-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wecare-core errors (this file)                                        │
//! │  ├── CoreError        - Stock, duplicate and persistence failures      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  wecare-store errors (separate crate)                                  │
//! │  └── StoreError       - products.txt read/write failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal / exit code   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every engine failure is returned before any product field changes, so an
//! `Err` always means "catalog untouched". The one exception is
//! [`CoreError::PersistenceFailure`], which the engine never returns from an
//! operation: it is reported inside a successful [`crate::Receipt`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product in the catalog matches the requested name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with the same (case-insensitive) name already exists.
    ///
    /// The operator should restock the existing product instead.
    #[error("Product already exists: {0}. Use restock instead")]
    DuplicateProduct(String),

    /// Fewer units on hand than the paid quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell 5 × "Aloe Gel"
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Aloe Gel", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Menu shows: "Insufficient stock. Available: 3"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Enough units for the paid quantity but not for the free items on top.
    #[error(
        "Insufficient stock for free items of {name}: available {available}, required {required}"
    )]
    InsufficientStockForFreeItems {
        name: String,
        available: i64,
        required: i64,
    },

    /// Quantity is zero, negative or above the accepted maximum.
    #[error("Invalid {field}: {value} (must be between 1 and {max})")]
    InvalidQuantity {
        field: &'static str,
        value: i64,
        max: i64,
    },

    /// An invoice could not be written to its target.
    ///
    /// Warning-level only: the inventory mutation that produced the invoice
    /// has already been applied and stays applied.
    #[error("Could not save invoice to {target}: {reason}")]
    PersistenceFailure { target: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Number of units on hand reported by a stock failure.
    pub fn available(&self) -> Option<i64> {
        match self {
            CoreError::InsufficientStock { available, .. }
            | CoreError::InsufficientStockForFreeItems { available, .. } => Some(*available),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Field consists of digits only.
    #[error("{field} cannot be just numbers")]
    NumericOnly { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field contains a character the catalog file cannot hold.
    #[error("{field} cannot contain {found:?}")]
    ForbiddenCharacter { field: String, found: char },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Aloe Gel".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Aloe Gel: available 3, requested 5"
        );

        let err = CoreError::DuplicateProduct("Aloe Gel".to_string());
        assert_eq!(
            err.to_string(),
            "Product already exists: Aloe Gel. Use restock instead"
        );
    }

    #[test]
    fn test_available_is_reported_for_stock_errors() {
        let err = CoreError::InsufficientStockForFreeItems {
            name: "Toner".to_string(),
            available: 10,
            required: 12,
        };
        assert_eq!(err.available(), Some(10));
        assert_eq!(CoreError::ProductNotFound("x".into()).available(), None);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Customer name".to_string(),
        };
        assert_eq!(err.to_string(), "Customer name cannot be empty");

        let err = ValidationError::NumericOnly {
            field: "Brand name".to_string(),
        };
        assert_eq!(err.to_string(), "Brand name cannot be just numbers");

        let err = ValidationError::ForbiddenCharacter {
            field: "Product name".to_string(),
            found: ',',
        };
        assert_eq!(err.to_string(), "Product name cannot contain ','");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
