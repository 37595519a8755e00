//! Core library for the `weather-report` CLI.
//!
//! This crate defines:
//! - The query/payload model and input validation
//! - The fetcher seam and its OpenWeatherMap implementation
//! - Rendering of a payload into a text report
//! - The interactive session that ties them together
//!
//! It is used by `weather-report-cli`, but the pieces can be driven on their
//! own: the session takes any [`Prompter`] and any [`WeatherFetcher`].

pub mod error;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod report;
pub mod session;

pub use error::{FetchError, InputError, PromptError, SessionError};
pub use model::{CurrentConditions, Units, WeatherPayload, WeatherQuery};
pub use prompt::{LinePrompter, Prompter};
pub use provider::{OpenWeatherFetcher, WeatherFetcher};
pub use report::render;
pub use session::run_session;
