//! Binary crate for the `weather-report` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Diagnostics setup
//! - Interactive prompting and exit codes

use clap::Parser;
use weather_report_core::SessionError;

mod cli;
mod prompt;
mod telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    telemetry::init_tracing(cmd.log_level());

    if let Err(err) = cmd.run().await {
        if let Some(session_err) = err.downcast_ref::<SessionError>() {
            eprintln!("Error: {session_err}");
            std::process::exit(session_err.exit_code());
        }
        return Err(err);
    }

    Ok(())
}
