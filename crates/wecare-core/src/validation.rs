//! # Validation Module
//!
//! Input validation for the command interface.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command Interface prompt loop                                │
//! │  └── THIS MODULE: empty / digits-only / line break / number checks     │
//! │           │  (re-prompt on error)                                      │
//! │           ▼                                                             │
//! │  Layer 2: InventoryEngine                                              │
//! │  ├── catalog text fields (no commas)                                   │
//! │  ├── quantity range (InvalidQuantity)                                  │
//! │  ├── product exists / does not exist                                   │
//! │  └── stock checks                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wecare_core::validation::{parse_positive, validate_catalog_field, validate_text_field};
//! use wecare_core::MAX_QUANTITY;
//!
//! assert_eq!(validate_text_field("Customer name", "  Sita ").unwrap(), "Sita");
//! assert!(validate_text_field("Customer name", "12345").is_err());
//! assert!(validate_catalog_field("Brand name", "Rose, Pink").is_err());
//! assert_eq!(parse_positive("Quantity", " 6 ", MAX_QUANTITY).unwrap(), 6);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a free-text field (product, brand, origin, customer, supplier).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not consist of digits only (whitespace between digits ignored)
/// - Must not contain a line break
///
/// ## Returns
/// The trimmed value.
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if is_numeric_only(value) {
        return Err(ValidationError::NumericOnly {
            field: field.to_string(),
        });
    }

    reject_chars(field, value, &['\n', '\r'])?;

    Ok(value.to_string())
}

/// Validates a text field stored in `products.txt` (name, brand, origin).
///
/// Same rules as [`validate_text_field`], plus no commas: a comma would
/// split the record into extra fields on the next load.
pub fn validate_catalog_field(field: &str, value: &str) -> ValidationResult<String> {
    let value = validate_text_field(field, value)?;
    reject_chars(field, &value, &[','])?;
    Ok(value)
}

fn reject_chars(field: &str, value: &str, forbidden: &[char]) -> ValidationResult<()> {
    match value.chars().find(|c| forbidden.contains(c)) {
        Some(found) => Err(ValidationError::ForbiddenCharacter {
            field: field.to_string(),
            found,
        }),
        None => Ok(()),
    }
}

fn is_numeric_only(value: &str) -> bool {
    let mut digits = value.chars().filter(|c| !c.is_whitespace()).peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a positive whole number typed by the operator.
///
/// ## Rules
/// - Must parse as an integer (`InvalidFormat`)
/// - Must be > 0 (`MustBePositive`)
/// - Must not exceed `max` (`OutOfRange`)
///
/// ## User Workflow
/// ```text
/// Enter quantity to sell: abc   → "Quantity has invalid format: ..."
/// Enter quantity to sell: 0     → "Quantity must be a positive number"
/// Enter quantity to sell: 6     → Ok(6)
/// ```
pub fn parse_positive(field: &str, raw: &str, max: i64) -> ValidationResult<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "please enter a whole number".to_string(),
        })?;

    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max,
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
