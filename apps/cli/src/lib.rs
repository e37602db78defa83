//! # WeCare Command Interface
//!
//! Terminal front end of the shop tool.
//!
//! ## Module Organization
//! ```text
//! wecare_cli/
//! ├── lib.rs          ◄─── You are here (logging, config, dispatch)
//! ├── cli.rs          ◄─── clap arguments and subcommands
//! ├── config.rs       ◄─── AppConfig: defaults, WECARE_* and flags
//! ├── session.rs      ◄─── Catalog + store + engine, receipt printing
//! ├── menu.rs         ◄─── Interactive 1-5 menu
//! ├── commands.rs     ◄─── list / sell / restock / add
//! └── error.rs        ◄─── CliError and exit status
//! ```
//!
//! ## Output Streams
//! Tables and invoices go to stdout. Logs and error messages go to stderr,
//! so `wecare list --json > catalog.json` stays clean.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;
use error::CliResult;
use menu::{ensure_stocked, Menu};
use session::Session;

/// Runs the command interface and maps the outcome to an exit status.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments ──────── clap (help / usage errors exit here)       │
/// │  2. Initialize logging ───── RUST_LOG, default "warn,wecare=info"       │
/// │  3. Resolve config ───────── defaults → WECARE_* → flags                │
/// │  4. Open session ─────────── load products.txt (missing → exit 2)       │
/// │  5. Menu or one-shot command                                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env().with_cli(&cli);
    debug!(?config, "Configuration resolved");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match dispatch(cli.command, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

/// Opens the session and runs the menu (no command) or one command.
pub fn dispatch(
    command: Option<Command>,
    config: &AppConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut session = Session::open(config)?;

    match command {
        None => {
            ensure_stocked(&session)?;
            info!(shop = %config.shop_name, "Starting interactive menu");
            Menu::new(&mut session, input, out).run()
        }
        Some(Command::List(args)) => commands::list(&session, &args, out),
        Some(Command::Sell(args)) => commands::sell(&mut session, &args, out),
        Some(Command::Restock(args)) => commands::restock(&mut session, &args, out),
        Some(Command::Add(args)) => commands::add(&mut session, &args, out),
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show lookups and prompts
/// - `RUST_LOG=wecare_store=debug` - Show file writes only
/// - Default: warnings, plus completed transactions from the wecare crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,wecare=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
