//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    Rs. 0.1 + Rs. 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa                                            │
//! │    Product prices are whole rupees, VAT is 13%:                        │
//! │    Rs. 100 = 10000 paisa → VAT 1300 paisa → Rs. 13.00 exactly          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wecare_core::money::Money;
//!
//! let price = Money::from_major(200);        // Rs. 200.00
//! let line = price.multiply_quantity(3);     // Rs. 600.00
//! assert_eq!(line.to_string(), "Rs. 600.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::types::VatRate;

/// Minor units per rupee.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paisa (1/100 rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the integer prices stored in `products.txt`
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Rounding only at the minor unit**: subtotals are never rounded,
///   VAT is rounded once, half-up, to whole paisa
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use wecare_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(13).minor(), 1300);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Calculates VAT on this amount, rounded half-up to whole paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use wecare_core::money::Money;
    /// use wecare_core::types::VatRate;
    ///
    /// let subtotal = Money::from_major(100);
    /// let vat = subtotal.calculate_vat(VatRate::from_bps(1300));
    /// assert_eq!(vat, Money::from_major(13));
    /// ```
    pub fn calculate_vat(&self, rate: VatRate) -> Money {
        // i128 so large subtotals cannot overflow before the division
        let vat = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_minor(vat as i64)
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way invoices print it: `Rs. 113.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}Rs. {}.{:02}",
            sign,
            self.major().abs(),
            self.minor_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
