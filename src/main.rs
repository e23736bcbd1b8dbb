//! Split Ledger CLI
//!
//! Command-line interface for computing group expense reports from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --members members.csv expenses.csv > balances.csv
//! cargo run -- --members members.csv --report plan expenses.csv > plan.csv
//! cargo run -- --members members.csv --settlements settlements.csv --report plan expenses.csv
//! ```
//!
//! The program reads the group roster and expense records (plus recorded
//! settlements, if given), replays them through the ledger engine, and
//! writes the requested report to stdout. Rows that fail to parse or that
//! the engine rejects are reported on stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, empty roster, etc.)

use split_ledger_engine::cli;
use split_ledger_engine::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = io::run_report(
        &args.members_file,
        &args.expenses_file,
        args.settlements_file.as_deref(),
        args.report,
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
