//! The interactive flow: API key, city and unit prompts, then one fetch and
//! one report.
//!
//! Every step returns a typed result. Nothing here exits the process; the
//! binary maps a [`SessionError`] to an exit code.

use std::io::Write;

use tracing::info;

use crate::{
    error::SessionError,
    model::{Units, WeatherQuery, validate_api_key, validate_city},
    prompt::Prompter,
    provider::WeatherFetcher,
    report::render,
};

pub const WELCOME_BANNER: &str = "Welcome to the Enhanced Weather App!";
pub const API_KEY_PROMPT: &str = "Enter your OpenWeatherMap API key:";
pub const CITY_PROMPT: &str = "Enter the name of the city:";
pub const UNIT_PROMPT: &str = "Enter your choice (1/2/3):";
pub const INVALID_UNIT_WARNING: &str = "Invalid choice. Defaulting to Celsius.";

const UNIT_MENU: [&str; 4] = [
    "Choose a unit type for temperature:",
    "1. Celsius (Metric)",
    "2. Fahrenheit (Imperial)",
    "3. Kelvin (Standard)",
];

pub fn read_api_key<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String, SessionError> {
    let input = prompter.ask_secret(API_KEY_PROMPT)?;
    Ok(validate_api_key(&input)?)
}

pub fn read_city<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String, SessionError> {
    let input = prompter.ask(CITY_PROMPT)?;
    Ok(validate_city(&input)?)
}

/// Show the unit menu and read a choice. Anything but `1`, `2` or `3` prints a
/// warning and falls back to metric; there is no second attempt.
pub fn read_units<P, W>(prompter: &mut P, out: &mut W) -> Result<Units, SessionError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out)?;
    for line in UNIT_MENU {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    let choice = prompter.ask(UNIT_PROMPT)?;
    match Units::from_menu_choice(&choice) {
        Some(units) => Ok(units),
        None => {
            writeln!(out, "{INVALID_UNIT_WARNING}")?;
            Ok(Units::Metric)
        }
    }
}

/// Fetch and render. A failed fetch is reported on `out` and rendered as the
/// "no data" report; only writing to `out` can fail here.
pub async fn fetch_report<F, W>(
    fetcher: &F,
    query: &WeatherQuery,
    out: &mut W,
) -> Result<String, SessionError>
where
    F: WeatherFetcher + ?Sized,
    W: Write + ?Sized,
{
    let payload = match fetcher.fetch(query).await {
        Ok(payload) => Some(payload),
        Err(err) => {
            writeln!(out, "Error while fetching data: {err}")?;
            None
        }
    };

    Ok(render(payload.as_ref(), query.units()))
}

pub async fn run_session<P, F, W>(
    prompter: &mut P,
    fetcher: &F,
    out: &mut W,
) -> Result<(), SessionError>
where
    P: Prompter + ?Sized,
    F: WeatherFetcher + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{WELCOME_BANNER}")?;
    out.flush()?;

    let api_key = read_api_key(prompter)?;
    let city = read_city(prompter)?;
    let units = read_units(prompter, out)?;
    let query = WeatherQuery::new(&api_key, &city, units)?;

    info!(city = query.city(), %units, "fetching current weather");
    let report = fetch_report(fetcher, &query, out).await?;

    writeln!(out)?;
    writeln!(out, "{report}")?;
    out.flush()?;

    Ok(())
}
