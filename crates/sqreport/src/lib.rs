//! # sqreport
//!
//! **CLI Binary**
//!
//! This is the entry point for the `sqreport` command-line application.
//! It owns everything the library crates leave to the caller.
//!
//! ## Responsibilities
//! * Parse command line arguments and load the config file
//! * Read input documents and write artifacts (creating parent directories)
//! * Install the logging subscriber
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod error_hints;
mod io;
mod logging;

use anyhow::Result;
use clap::Parser;
use sqreport_config::Cli;

/// Entry point used by the `sqreport` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    commands::dispatch(cli)
}

/// Render an error chain with remediation hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
