//! # Interactive Menu
//!
//! ```text
//! Options:
//! 1. Display Products
//! 2. Sell Product
//! 3. Restock Existing Product
//! 4. Add New Product
//! 5. Exit
//! Enter your choice (1-5):
//! ```
//!
//! Every prompt repeats until the answer is valid. End of input at any
//! prompt leaves the menu without touching the catalog.

use std::io::{BufRead, Write};

use tracing::debug;
use wecare_core::display::render_catalog_table;
use wecare_core::validation::{
    parse_positive, validate_catalog_field, validate_text_field, ValidationResult,
};
use wecare_core::{Clock, InvoiceSink, Receipt, MAX_QUANTITY, MAX_UNIT_PRICE};

use crate::error::{CliError, CliResult};
use crate::session::{write_receipt, Session};

/// What the loop does after a menu choice.
enum Flow {
    Continue,
    Quit,
}

/// Menu bound to a session and a pair of terminal streams.
pub struct Menu<'a, R, W, S, C> {
    session: &'a mut Session<S, C>,
    input: R,
    out: W,
}

impl<'a, R, W, S, C> Menu<'a, R, W, S, C>
where
    R: BufRead,
    W: Write,
    S: InvoiceSink,
    C: Clock,
{
    pub fn new(session: &'a mut Session<S, C>, input: R, out: W) -> Self {
        Menu {
            session,
            input,
            out,
        }
    }

    /// Runs until option 5 or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            writeln!(self.out, "\nOptions:")?;
            writeln!(self.out, "1. Display Products")?;
            writeln!(self.out, "2. Sell Product")?;
            writeln!(self.out, "3. Restock Existing Product")?;
            writeln!(self.out, "4. Add New Product")?;
            writeln!(self.out, "5. Exit")?;

            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                debug!("End of input at menu");
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.display()?,
                "2" => self.sell()?,
                "3" => self.restock()?,
                "4" => self.add_product()?,
                "5" => {
                    writeln!(
                        self.out,
                        "\nThank you for using {} System!",
                        self.session.shop_name()
                    )?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.out, "Invalid choice! Please select 1-5.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    // =========================================================================
    // Menu Options
    // =========================================================================

    fn display(&mut self) -> CliResult<Flow> {
        let table = render_catalog_table(self.session.catalog(), self.session.shop_name());
        write!(self.out, "{table}")?;
        Ok(Flow::Continue)
    }

    fn sell(&mut self) -> CliResult<Flow> {
        let Some(product) = self.ask_existing_product("Enter product name to sell: ")? else {
            return Ok(Flow::Quit);
        };

        let quantity = loop {
            let Some(quantity) =
                self.ask_number("Enter quantity to sell: ", "Quantity", MAX_QUANTITY)?
            else {
                return Ok(Flow::Quit);
            };
            let available = self
                .session
                .catalog()
                .find(&product)
                .map_or(0, |p| p.quantity);
            if available >= quantity {
                break quantity;
            }
            writeln!(self.out, "\nError: Insufficient stock. Available: {available}")?;
        };

        let Some(customer) = self.ask_text("Enter customer name: ", "Customer name")? else {
            return Ok(Flow::Quit);
        };

        let result = self.session.sell(&product, quantity, &customer);
        self.finish(result)?;
        Ok(Flow::Continue)
    }

    fn restock(&mut self) -> CliResult<Flow> {
        let Some(product) = self.ask_existing_product("Enter product name to restock: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) =
            self.ask_number("Enter quantity to purchase: ", "Quantity", MAX_QUANTITY)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(supplier) = self.ask_text("Enter supplier name: ", "Supplier name")? else {
            return Ok(Flow::Quit);
        };

        let result = self.session.restock(&product, quantity, &supplier);
        self.finish(result)?;
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> CliResult<Flow> {
        writeln!(self.out, "\nAdd New Product")?;
        writeln!(self.out, "{}", "-".repeat(20))?;

        let Some(product) = self.ask_new_product("Enter product name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(brand) = self.ask_catalog_text("Enter brand name: ", "Brand name")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.ask_number("Enter quantity: ", "Quantity", MAX_QUANTITY)? else {
            return Ok(Flow::Quit);
        };
        let Some(cost_price) =
            self.ask_number("Enter cost price (Rs.): ", "Cost price", MAX_UNIT_PRICE)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(origin) = self.ask_catalog_text("Enter country of origin: ", "Country of origin")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(supplier) = self.ask_text("Enter supplier name: ", "Supplier name")? else {
            return Ok(Flow::Quit);
        };

        let result = self.session.add_product(
            &product, &brand, quantity, cost_price, &origin, &supplier,
        );
        if self.finish(result)? {
            writeln!(self.out, "\nProduct added successfully!")?;
        }
        Ok(Flow::Continue)
    }

    /// Prints the receipt, or the refusal when a business rule blocked the
    /// operation. Catalog and terminal failures end the menu.
    fn finish(&mut self, result: CliResult<Receipt>) -> CliResult<bool> {
        match result {
            Ok(receipt) => {
                write_receipt(&mut self.out, &receipt)?;
                Ok(true)
            }
            Err(err) if err.code.exit_status() == 1 => {
                writeln!(self.out, "\nError: {err}")?;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_text(&mut self, label: &str, field: &str) -> CliResult<Option<String>> {
        self.ask_validated(label, field, validate_text_field)
    }

    /// Like `ask_text`, for fields written to `products.txt`.
    fn ask_catalog_text(&mut self, label: &str, field: &str) -> CliResult<Option<String>> {
        self.ask_validated(label, field, validate_catalog_field)
    }

    fn ask_validated(
        &mut self,
        label: &str,
        field: &str,
        validate: fn(&str, &str) -> ValidationResult<String>,
    ) -> CliResult<Option<String>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match validate(field, &raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.out, "Error: {err}.")?,
            }
        }
    }

    fn ask_number(&mut self, label: &str, field: &str, max: i64) -> CliResult<Option<i64>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_positive(field, &raw, max) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.out, "Invalid input! {err}.")?,
            }
        }
    }

    fn ask_existing_product(&mut self, label: &str) -> CliResult<Option<String>> {
        loop {
            let Some(name) = self.ask_text(label, "Product name")? else {
                return Ok(None);
            };
            if self.session.catalog().contains_name(&name) {
                return Ok(Some(name));
            }
            writeln!(self.out, "\nError: Product not found.")?;
        }
    }

    fn ask_new_product(&mut self, label: &str) -> CliResult<Option<String>> {
        loop {
            let Some(name) = self.ask_catalog_text(label, "Product name")? else {
                return Ok(None);
            };
            if !self.session.catalog().contains_name(&name) {
                return Ok(Some(name));
            }
            writeln!(
                self.out,
                "\nError: Product already exists. Use restock option instead."
            )?;
        }
    }
}

/// Refuses to open the menu on an empty catalog.
pub fn ensure_stocked<S, C>(session: &Session<S, C>) -> CliResult<()>
where
    S: InvoiceSink,
    C: Clock,
{
    if session.catalog().is_empty() {
        return Err(CliError::empty_catalog());
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::{scratch_session, SAMPLE};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Feeds `input` to a menu over the sample catalog; returns the output.
    fn drive(dir: &TempDir, input: &str) -> String {
        let mut session = scratch_session(dir.path());
        let mut out = Vec::new();
        Menu::new(&mut session, Cursor::new(input.as_bytes()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn saved_catalog(dir: &TempDir) -> String {
        fs::read_to_string(dir.path().join("products.txt")).unwrap()
    }

    #[test]
    fn test_display_then_exit() {
        let dir = TempDir::new().unwrap();
        let out = drive(&dir, "1\n5\n");

        assert!(out.contains("WeCare Skin Care Products Inventory"));
        assert!(out.contains("Total Products: 2"));
        assert!(out.contains("Thank you for using WeCare Skin Care Products System!"));
    }

    #[test]
    fn test_invalid_choice_repeats_menu() {
        let dir = TempDir::new().unwrap();
        let out = drive(&dir, "9\n5\n");

        assert!(out.contains("Invalid choice! Please select 1-5."));
        assert_eq!(out.matches("Enter your choice (1-5): ").count(), 2);
    }

    #[test]
    fn test_sell_reprompts_until_valid() {
        let dir = TempDir::new().unwrap();
        let input = "2\n123\nToner\naloe gel\nabc\n0\n50\n3\n\n42\nSita\n5\n";
        let out = drive(&dir, input);

        assert!(out.contains("Error: Product name cannot be just numbers."));
        assert!(out.contains("Error: Product not found."));
        assert!(out.contains("Invalid input! Quantity has invalid format"));
        assert!(out.contains("Invalid input! Quantity must be a positive number."));
        assert!(out.contains("Error: Insufficient stock. Available: 10"));
        assert!(out.contains("Error: Customer name cannot be empty."));
        assert!(out.contains("Error: Customer name cannot be just numbers."));
        assert!(out.contains("Invoice generated successfully!"));
        assert!(out.contains("Customer Name: Sita"));

        // 3 paid + 1 free
        assert!(saved_catalog(&dir).starts_with("Aloe Gel,Nature,6,100,Nepal\n"));
    }

    #[test]
    fn test_free_item_shortfall_is_reported_and_menu_continues() {
        let dir = TempDir::new().unwrap();
        // 9 paid needs 12 units, only 10 on hand
        let out = drive(&dir, "2\nAloe Gel\n9\nSita\n5\n");

        assert!(out.contains("Error: Insufficient stock for free items of Aloe Gel"));
        assert!(out.contains("Thank you for using"));
        assert_eq!(saved_catalog(&dir), SAMPLE);
    }

    #[test]
    fn test_restock_keeps_selling_price() {
        let dir = TempDir::new().unwrap();
        let out = drive(&dir, "3\nsunscreen\n6\nSol Traders\n5\n");

        assert!(out.contains("Purchase invoice generated successfully!"));
        assert!(saved_catalog(&dir).contains("Sunscreen,Sol,10,250,India\n"));
    }

    #[test]
    fn test_add_product_rejects_duplicate_name() {
        let dir = TempDir::new().unwrap();
        let input = "4\nALOE GEL\nToner\nRose\n12\n80\nKorea\nGlow Traders\n5\n";
        let out = drive(&dir, input);

        assert!(out.contains("Error: Product already exists. Use restock option instead."));
        assert!(out.contains("Product added successfully!"));
        assert!(saved_catalog(&dir).ends_with("Toner,Rose,12,80,Korea\n"));
    }

    #[test]
    fn test_add_product_reprompts_on_commas() {
        let dir = TempDir::new().unwrap();
        let input = "4\nToner, Pink\nToner\nRose, Co\nRose\n12\n80\n\
                     South,Korea\nKorea\nGlow, Ltd\n5\n";
        let out = drive(&dir, input);

        assert_eq!(out.matches("Error: Product name cannot contain ','.").count(), 1);
        assert!(out.contains("Error: Brand name cannot contain ','."));
        assert!(out.contains("Error: Country of origin cannot contain ','."));
        assert!(out.contains("Product added successfully!"));
        assert_eq!(
            saved_catalog(&dir),
            format!("{SAMPLE}Toner,Rose,12,80,Korea\n")
        );
    }

    #[test]
    fn test_end_of_input_mid_operation_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = drive(&dir, "2\naloe gel\n3\n");

        assert!(!out.contains("Invoice generated"));
        assert_eq!(saved_catalog(&dir), SAMPLE);
    }

    #[test]
    fn test_empty_catalog_refuses_menu() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        fs::write(&path, "\n").unwrap();
        let store = wecare_store::FlatFileCatalog::new(&path);
        let session = Session::new(
            store,
            wecare_core::Catalog::new(),
            wecare_core::InventoryEngine::with_clock(
                wecare_store::DirectoryInvoiceSink::new(dir.path()),
                crate::session::tests::fixed_clock(),
            ),
            "WeCare".to_string(),
        );

        let err = ensure_stocked(&session).unwrap_err();
        assert_eq!(err.code.exit_status(), 2);
    }
}
