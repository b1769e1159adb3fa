//! pyfresh CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 130: Cancelled by user

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INTERRUPTED: u8 = 130;
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; ignore the error if a subscriber is already set
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("pyfresh=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    let cli = Cli::parse();

    tokio::select! {
        result = cli::run(cli) => match result {
            Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
            Err(e) => {
                eprintln!("❌ Error: {:#}", e);
                ExitCode::from(ExitCodes::GENERAL_ERROR)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n❌ Operation cancelled by user");
            ExitCode::from(ExitCodes::INTERRUPTED)
        }
    }
}
