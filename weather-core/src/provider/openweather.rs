use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    error::FetchError,
    model::{WeatherPayload, WeatherQuery},
};

use super::WeatherFetcher;

pub const OPENWEATHER_CURRENT_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Fetcher for OpenWeatherMap's current weather endpoint.
///
/// No timeout or retry is configured; the client's defaults apply.
#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    base_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new() -> Self {
        Self::with_base_url(OPENWEATHER_CURRENT_URL)
    }

    /// Point the fetcher at another endpoint, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherPayload, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.city()),
                ("appid", query.api_key()),
                ("units", query.units().as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let payload: WeatherPayload = serde_json::from_str(&body)?;
        debug!(%status, bytes = body.len(), "received weather payload");

        Ok(payload)
    }
}

impl Default for OpenWeatherFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    #[instrument(skip_all, fields(city = query.city(), units = %query.units()))]
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherPayload, FetchError> {
        let result = self.fetch_current(query).await;
        if let Err(err) = &result {
            warn!(error = %err, "weather request failed");
        }
        result
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
