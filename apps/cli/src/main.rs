//! # WeCare Entry Point
//!
//! `wecare` with no arguments opens the interactive menu; `wecare <command>`
//! runs one operation and exits.
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Resolve configuration
//! 4. Load `products.txt`
//! 5. Run the menu or the one-shot command

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    wecare_cli::run()
}
