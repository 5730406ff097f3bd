//! Binary crate for the `apidemo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Terminal input for the menu loop

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod input;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);
    cmd.run().await
}

/// Logs go to stderr so they never mix with menu output.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,apidemo_core=debug,apidemo_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
