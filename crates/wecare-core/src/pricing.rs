//! # Pricing Policy
//!
//! Markup, promotion and VAT rules of the shop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cost 100 ──► selling_price() ──► 200    (2× markup, fixed at creation) │
//! │                                                                         │
//! │  buy 9    ──► free_items()    ──► +3     (buy 3 get 1 free)             │
//! │                                                                         │
//! │  Rs. 600  ──► vat_breakdown() ──► VAT Rs. 78.00, total Rs. 678.00       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::VatRate;
use crate::VAT_RATE;

/// Selling price multiplier applied to the cost price.
pub const MARKUP_FACTOR: i64 = 2;

/// One free unit for every this many paid units.
pub const PAID_UNITS_PER_FREE_ITEM: i64 = 3;

/// Selling price for a product with the given cost price.
///
/// Computed once when a product is created. Restocking keeps the old
/// selling price even if the supplier's cost has moved.
pub const fn selling_price(cost_price: i64) -> i64 {
    cost_price * MARKUP_FACTOR
}

/// Free units granted on a sale of `quantity` paid units (floor division).
pub const fn free_items(quantity: i64) -> i64 {
    quantity.div_euclid(PAID_UNITS_PER_FREE_ITEM)
}

/// Subtotal, VAT and total of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// VAT-exclusive amount. Used unrounded as the VAT basis.
    pub subtotal: Money,
    pub rate: VatRate,
    pub vat: Money,
    pub total: Money,
}

/// VAT breakdown at the shop's fixed rate.
pub fn vat_breakdown(subtotal: Money) -> VatBreakdown {
    vat_breakdown_at(subtotal, VAT_RATE)
}

/// VAT breakdown at an explicit rate.
pub fn vat_breakdown_at(subtotal: Money, rate: VatRate) -> VatBreakdown {
    let vat = subtotal.calculate_vat(rate);
    VatBreakdown {
        subtotal,
        rate,
        vat,
        total: subtotal + vat,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_selling_price_doubles_cost() {
        assert_eq!(selling_price(100), 200);
        assert_eq!(selling_price(0), 0);
    }

    #[test]
    fn test_free_items() {
        assert_eq!(free_items(9), 3);
        assert_eq!(free_items(2), 0);
        assert_eq!(free_items(3), 1);
        assert_eq!(free_items(8), 2);
    }

    #[test]
    fn test_vat_breakdown_of_100() {
        let breakdown = vat_breakdown(Money::from_major(100));
        assert_eq!(breakdown.vat, Money::from_major(13));
        assert_eq!(breakdown.total, Money::from_major(113));
        assert_eq!(breakdown.rate.whole_percent(), 13);
    }

    #[test]
    fn test_vat_breakdown_keeps_paisa() {
        let breakdown = vat_breakdown(Money::from_major(45));
        assert_eq!(breakdown.vat, Money::from_minor(585));
        assert_eq!(breakdown.total.to_string(), "Rs. 50.85");
    }

    proptest! {
        #[test]
        fn total_is_subtotal_plus_vat(rupees in 0i64..10_000_000) {
            let b = vat_breakdown(Money::from_major(rupees));
            prop_assert_eq!(b.total, b.subtotal + b.vat);
            // whole rupees at 13% never need rounding
            prop_assert_eq!(b.vat.minor(), rupees * 13);
        }

        #[test]
        fn free_items_never_exceed_a_third(quantity in 1i64..1_000_000) {
            let free = free_items(quantity);
            prop_assert!(free * 3 <= quantity);
            prop_assert!((free + 1) * 3 > quantity);
        }
    }
}
