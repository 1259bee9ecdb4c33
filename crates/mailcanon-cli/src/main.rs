//! `mailcanon` - validate and normalize email addresses.
//!
//! Addresses come from the command line, or one per line on stdin when none
//! are given. Exits with status 1 if any address is invalid.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod report;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report::Report;

/// Validate and normalize email addresses
#[derive(Parser, Debug)]
#[command(name = "mailcanon")]
#[command(about = "Validate and normalize email addresses", long_about = None)]
#[command(version)]
struct Cli {
    /// Addresses to check; read from stdin, one per line, when omitted
    #[arg(value_name = "ADDRESS")]
    addresses: Vec<String>,

    /// Print one JSON object per address
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Print nothing; report through the exit status only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn run(&self) -> anyhow::Result<ExitCode> {
        let mut stdout = io::stdout().lock();
        let mut all_valid = true;

        let mut emit = |input: &str| -> anyhow::Result<()> {
            let report = Report::check(input);
            debug!(input, valid = report.valid, "checked address");
            all_valid &= report.valid;
            if self.quiet {
                return Ok(());
            }
            let line = if self.json {
                report.to_json().context("Failed to encode report")?
            } else {
                report.to_text()
            };
            writeln!(stdout, "{line}").context("Failed to write output")
        };

        if self.addresses.is_empty() {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                if !line.trim().is_empty() {
                    emit(&line)?;
                }
            }
        } else {
            for address in &self.addresses {
                emit(address)?;
            }
        }

        Ok(if all_valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailcanon=info,mailcanon_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(count = cli.addresses.len(), "Starting mailcanon");
    cli.run()
}
