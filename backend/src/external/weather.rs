//! Weather API client for fetching day-level weather data
//!
//! Integrates with the Visual Crossing timeline API

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use shared::WeatherSnapshot;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Timeline API response; only the days collection is read
#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(default)]
    days: Vec<Value>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.clone(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch weather readings for one location/date pair.
    ///
    /// Reads the first entry of the provider's `days` array; fields the
    /// provider omitted come back as the "N/A" sentinel.
    pub async fn fetch_weather(&self, location: &str, date: &str) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/{}/{}?unitGroup=metric&key={}&contentType=json",
            self.base_url, location, date, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream {
                status: response.status().as_u16(),
                message: "Error fetching weather data".to_string(),
            });
        }

        let data: TimelineResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        let day = data.days.first().ok_or_else(|| {
            AppError::NotFound("No weather data available for this date".to_string())
        })?;

        Ok(WeatherSnapshot::from_day(day))
    }
}
