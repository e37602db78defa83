//! # Catalog Table
//!
//! Fixed-width listing of the catalog for the terminal.
//!
//! ```text
//! ============================================================================================
//!                           WeCare Skin Care Products Inventory
//! ============================================================================================
//! Product Name         |Brand           |Quantity |  Cost Price | Selling Price |Origin
//! --------------------------------------------------------------------------------------------
//! Aloe Gel             |Nature          |      10 |  Rs. 100.00 |    Rs. 200.00 |Nepal
//! ```
//!
//! Text cells are cut to their column width for display only; the catalog
//! itself is never modified.

use std::fmt::Write as _;

use crate::types::{Catalog, Product};

const NAME_WIDTH: usize = 20;
const BRAND_WIDTH: usize = 15;
const QUANTITY_WIDTH: usize = 8;
const COST_WIDTH: usize = 12;
const SELLING_WIDTH: usize = 14;
const ORIGIN_WIDTH: usize = 15;
const TABLE_WIDTH: usize = 92;

/// Renders the whole catalog as a table with a product count footer.
pub fn render_catalog_table(catalog: &Catalog, shop_name: &str) -> String {
    if catalog.is_empty() {
        return "\nNo products available.\n".to_string();
    }

    let heavy = "=".repeat(TABLE_WIDTH);
    let light = "-".repeat(TABLE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&format!("{:>26}{} Inventory\n", "", shop_name));
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&header_row());
    out.push('\n');
    out.push_str(&light);
    out.push('\n');

    for product in catalog {
        out.push_str(&product_row(product));
        out.push('\n');
    }

    out.push_str(&light);
    out.push('\n');
    let _ = writeln!(out, "Total Products: {}", catalog.len());
    out.push_str(&heavy);
    out.push('\n');
    out
}

fn header_row() -> String {
    format!(
        "{:<nw$} |{:<bw$} |{:>qw$} |{:>cw$} |{:>sw$} |{:<ow$}",
        "Product Name",
        "Brand",
        "Quantity",
        "Cost Price",
        "Selling Price",
        "Origin",
        nw = NAME_WIDTH,
        bw = BRAND_WIDTH,
        qw = QUANTITY_WIDTH,
        cw = COST_WIDTH,
        sw = SELLING_WIDTH,
        ow = ORIGIN_WIDTH,
    )
}

/// One table row; numeric columns right-aligned.
pub fn product_row(product: &Product) -> String {
    format!(
        "{:<nw$} |{:<bw$} |{:>qw$} |{:>cw$} |{:>sw$} |{:<ow$}",
        truncate(&product.name, NAME_WIDTH),
        truncate(&product.brand, BRAND_WIDTH),
        product.quantity,
        product.cost().to_string(),
        product.price().to_string(),
        truncate(&product.origin, ORIGIN_WIDTH),
        nw = NAME_WIDTH,
        bw = BRAND_WIDTH,
        qw = QUANTITY_WIDTH,
        cw = COST_WIDTH,
        sw = SELLING_WIDTH,
        ow = ORIGIN_WIDTH,
    )
}

/// Keeps the first `width` characters.
fn truncate(value: &str, width: usize) -> &str {
    match value.char_indices().nth(width) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_characters() {
        assert_eq!(truncate("Aloe", 10), "Aloe");
        assert_eq!(truncate("Aloe Vera Soothing Gel", 9), "Aloe Vera");
        assert_eq!(truncate("Crème Brûlée", 5), "Crème");
    }

    #[test]
    fn test_row_truncates_and_aligns() {
        let product = Product::new(
            "Hyaluronic Acid Serum Extra",
            "Nature",
            7,
            150,
            "South Korea Seoul Province",
        );
        let row = product_row(&product);

        assert!(row.starts_with("Hyaluronic Acid Seru |Nature          |       7 |"));
        assert!(row.contains("|  Rs. 150.00 |"));
        assert!(row.contains("|    Rs. 300.00 |"));
        assert!(row.ends_with("|South Korea Seo"));
        // stored values are untouched
        assert_eq!(product.name, "Hyaluronic Acid Serum Extra");
    }

    #[test]
    fn test_table_has_banner_and_footer() {
        let catalog: Catalog = vec![
            Product::new("Aloe Gel", "Nature", 10, 100, "Nepal"),
            Product::new("Sunscreen", "Sol", 4, 250, "India"),
        ]
        .into_iter()
        .collect();

        let table = render_catalog_table(&catalog, "WeCare");
        assert!(table.contains("WeCare Inventory"));
        assert!(table.contains("Product Name         |Brand           |Quantity |"));
        assert!(table.contains("Total Products: 2"));
        assert_eq!(table.lines().filter(|l| l.starts_with("Aloe Gel")).count(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(render_catalog_table(&Catalog::new(), "WeCare").contains("No products available."));
    }
}
