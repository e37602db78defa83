//! # Command Line
//!
//! ```text
//! wecare [--catalog PATH] [--invoice-dir DIR] [--shop-name NAME] [COMMAND]
//!
//!   (none)     interactive menu
//!   list       print the catalog table (or JSON with --json)
//!   sell       sell to a customer, buy-3-get-1 applies
//!   restock    buy more of an existing product
//!   add        buy a product the shop does not carry yet
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wecare")]
#[command(about = "WeCare Skin Care Products inventory and invoicing")]
pub struct Cli {
    /// Catalog file (overrides `WECARE_CATALOG`).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Folder that receives `invoices/` and `purchase_invoices/`
    /// (overrides `WECARE_INVOICE_DIR`).
    #[arg(long, global = true)]
    pub invoice_dir: Option<PathBuf>,

    /// Shop name printed on invoices (overrides `WECARE_SHOP_NAME`).
    #[arg(long, global = true)]
    pub shop_name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every product.
    List(ListArgs),
    /// Sell a product to a customer.
    Sell(SellArgs),
    /// Add stock to an existing product.
    Restock(RestockArgs),
    /// Add a new product to the catalog.
    Add(AddArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SellArgs {
    #[arg(long)]
    pub product: String,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long)]
    pub customer: String,
}

#[derive(Args, Debug)]
pub struct RestockArgs {
    #[arg(long)]
    pub product: String,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long)]
    pub supplier: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub product: String,
    #[arg(long)]
    pub brand: String,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    /// Cost price per unit in whole rupees.
    #[arg(long, allow_negative_numbers = true)]
    pub cost: i64,
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["wecare"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_sell_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wecare",
            "sell",
            "--product",
            "aloe gel",
            "--quantity",
            "3",
            "--customer",
            "Sita",
            "--catalog",
            "/tmp/products.txt",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/products.txt")));
        match cli.command {
            Some(Command::Sell(args)) => {
                assert_eq!(args.product, "aloe gel");
                assert_eq!(args.quantity, 3);
                assert_eq!(args.customer, "Sita");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_requires_every_field() {
        let result = Cli::try_parse_from(["wecare", "add", "--product", "Toner", "--brand", "Rose"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::try_parse_from(["wecare", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List(ListArgs { json: true }))));
    }

    #[test]
    fn test_negative_quantity_reaches_the_engine() {
        let cli = Cli::try_parse_from([
            "wecare",
            "restock",
            "--product",
            "Aloe Gel",
            "--quantity",
            "-2",
            "--supplier",
            "Acme",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Restock(RestockArgs { quantity: -2, .. }))
        ));
    }
}
