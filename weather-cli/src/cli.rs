use std::io::{self, IsTerminal};

use clap::{ArgAction, Parser};
use tracing::debug;
use weather_report_core::{LinePrompter, OpenWeatherFetcher, run_session};

use crate::prompt::InquirePrompter;

/// Top-level CLI struct.
///
/// The report itself is driven by interactive prompts; flags only tune
/// diagnostics.
#[derive(Debug, Parser)]
#[command(
    name = "weather-report",
    version,
    about = "Show current weather for a city using OpenWeatherMap"
)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Override the provider endpoint URL.
    #[arg(long, value_name = "URL", hide = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let fetcher = match self.endpoint {
            Some(url) => OpenWeatherFetcher::with_base_url(url),
            None => OpenWeatherFetcher::new(),
        };
        debug!(endpoint = fetcher.base_url(), "using weather endpoint");
        let mut out = io::stdout();

        // inquire needs a terminal; piped input falls back to plain lines.
        if io::stdin().is_terminal() {
            let mut prompter = InquirePrompter;
            run_session(&mut prompter, &fetcher, &mut out).await?;
        } else {
            let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
            run_session(&mut prompter, &fetcher, &mut out).await?;
        }

        Ok(())
    }
}
