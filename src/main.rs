// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use colored::*;

use pseudover::stamp;
use pseudover::types::CommitHash;

#[derive(Parser)]
#[command(name = "pseudover")]
#[command(version = env!("PSEUDOVER_VERSION"))]
#[command(about = "Create module pseudo-version tags from commit metadata", long_about = None)]
struct Cli {
    /// Commit hash (only the first 12 characters are used)
    git_hash: String,

    /// Commit timestamp, e.g. "Mon Jan 2 15:04:05 2023 -0700"
    git_date: String,
}

/// Entry point for the pseudover CLI.
///
/// Parses the two positional arguments, builds the pseudo-version, and
/// prints it to stdout. A malformed commit date is reported on stderr and
/// exits non-zero; nothing is ever written to stdout on failure.
fn main() {
    let cli = Cli::parse();

    match stamp::pseudo_version(CommitHash::new(cli.git_hash), &cli.git_date) {
        Ok(version) => println!("{}", version),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
