//! # Invoice Numbering
//!
//! Timestamp-derived identifiers and the clock they are read from.
//!
//! ```text
//!   2024-03-07 09:05:02.000123
//!        │
//!        ├──► invoice_number()  → "20240307090502"
//!        │
//!        └──► supplier_vat_id() → "SUP00000123"
//! ```
//!
//! ## Uniqueness
//! Invoice numbers have one-second resolution. Two invoices issued within
//! the same second get the same number and the second one overwrites the
//! first invoice file. The interactive menu cannot produce two transactions
//! per second in practice; scripted callers must space them out.

use chrono::{Local, NaiveDateTime, Timelike};

/// Prefix of the placeholder supplier VAT numbers.
pub const SUPPLIER_VAT_PREFIX: &str = "SUP";

/// Digits after the supplier VAT prefix.
const SUPPLIER_VAT_DIGITS: usize = 8;

// =============================================================================
// Clock
// =============================================================================

/// Source of "now" for invoice numbers and invoice dates.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Invoice number: `YYYYMMDDHHMMSS`, every component after the year
/// zero-padded to two digits.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use wecare_core::numbering::invoice_number;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .and_then(|d| d.and_hms_opt(9, 5, 2))
///     .unwrap();
/// assert_eq!(invoice_number(&at), "20240307090502");
/// ```
pub fn invoice_number(now: &NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Invoice date line: `YYYY-MM-DD HH:MM:SS`.
pub fn invoice_date(now: &NaiveDateTime) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Placeholder supplier VAT number built from the sub-second component.
///
/// The microseconds are left-padded with zeros to 8 digits (or cut to the
/// first 8) and prefixed with [`SUPPLIER_VAT_PREFIX`]. Not a real
/// registration number and not random in any meaningful sense.
pub fn supplier_vat_id(now: &NaiveDateTime) -> String {
    let micros = (now.nanosecond() / 1_000).to_string();
    let digits: String = if micros.len() >= SUPPLIER_VAT_DIGITS {
        micros.chars().take(SUPPLIER_VAT_DIGITS).collect()
    } else {
        format!("{micros:0>width$}", width = SUPPLIER_VAT_DIGITS)
    };
    format!("{SUPPLIER_VAT_PREFIX}{digits}")
}

// =============================================================================
// Unit Tests
// =============================================================================
