//! # One-shot Commands
//!
//! `wecare list | sell | restock | add`: one operation per process.
//! Text arguments go through the same validators as the menu prompts;
//! quantities and prices are checked by the engine.

use std::io::Write;

use tracing::debug;
use wecare_core::display::render_catalog_table;
use wecare_core::validation::{validate_catalog_field, validate_text_field};
use wecare_core::{Clock, InvoiceSink};

use crate::cli::{AddArgs, ListArgs, RestockArgs, SellArgs};
use crate::error::CliResult;
use crate::session::{write_receipt, Session};

/// Prints the catalog as a table, or as JSON with `--json`.
pub fn list<S: InvoiceSink, C: Clock>(
    session: &Session<S, C>,
    args: &ListArgs,
    out: &mut impl Write,
) -> CliResult<()> {
    if args.json {
        let json = serde_json::to_string_pretty(session.catalog())?;
        writeln!(out, "{json}")?;
    } else {
        write!(
            out,
            "{}",
            render_catalog_table(session.catalog(), session.shop_name())
        )?;
    }
    Ok(())
}

pub fn sell<S: InvoiceSink, C: Clock>(
    session: &mut Session<S, C>,
    args: &SellArgs,
    out: &mut impl Write,
) -> CliResult<()> {
    let product = validate_text_field("Product name", &args.product)?;
    let customer = validate_text_field("Customer name", &args.customer)?;
    debug!(%product, quantity = args.quantity, %customer, "sell command");

    let receipt = session.sell(&product, args.quantity, &customer)?;
    write_receipt(out, &receipt)?;
    Ok(())
}

pub fn restock<S: InvoiceSink, C: Clock>(
    session: &mut Session<S, C>,
    args: &RestockArgs,
    out: &mut impl Write,
) -> CliResult<()> {
    let product = validate_text_field("Product name", &args.product)?;
    let supplier = validate_text_field("Supplier name", &args.supplier)?;
    debug!(%product, quantity = args.quantity, %supplier, "restock command");

    let receipt = session.restock(&product, args.quantity, &supplier)?;
    write_receipt(out, &receipt)?;
    Ok(())
}

pub fn add<S: InvoiceSink, C: Clock>(
    session: &mut Session<S, C>,
    args: &AddArgs,
    out: &mut impl Write,
) -> CliResult<()> {
    let product = validate_catalog_field("Product name", &args.product)?;
    let brand = validate_catalog_field("Brand name", &args.brand)?;
    let origin = validate_catalog_field("Country of origin", &args.origin)?;
    let supplier = validate_text_field("Supplier name", &args.supplier)?;
    debug!(%product, %brand, quantity = args.quantity, cost = args.cost, "add command");

    let receipt = session.add_product(
        &product,
        &brand,
        args.quantity,
        args.cost,
        &origin,
        &supplier,
    )?;
    write_receipt(out, &receipt)?;
    writeln!(out, "\nProduct added successfully!")?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
