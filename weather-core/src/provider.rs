use crate::{FetchError, WeatherPayload, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::{OPENWEATHER_CURRENT_URL, OpenWeatherFetcher};

/// Source of current-conditions payloads.
///
/// The session only talks to this trait, so tests can drive it with a stub
/// instead of the network.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherPayload, FetchError>;
}
