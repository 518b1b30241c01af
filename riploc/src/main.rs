//! # riploc - Main Entry Point
//!
//! Parses the command line, runs one lookup and prints the report. The only
//! failing outcome is a missing kernel binary; an unresolved RIP is still a
//! successful run.

use anyhow::{Context, Result};
use clap::Parser;
use riploc::cli::Args;
use riploc::domain::LocatorError;
use riploc::lookup::{run_lookup, LookupConfig};
use riploc::report::write_report;
use riploc::symbolization::ProcessRunner;
use std::io::Write;

// Exit codes (usage errors exit with 2 from clap)
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_KERNEL_NOT_FOUND: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LocatorError>() {
        Some(LocatorError::KernelNotFound(_)) => EXIT_KERNEL_NOT_FOUND,
        None => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let config = LookupConfig::from(Args::parse());
    let lookup = run_lookup(&config, &ProcessRunner)?;

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, &lookup, config.demangle).context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(())
}
