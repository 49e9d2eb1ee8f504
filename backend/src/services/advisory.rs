//! Advisory request orchestration
//!
//! Sequences authorization, field validation, the weather fetch, and the
//! recommendation fetch, then assembles the combined report. Any stage's
//! failure ends the request with that stage's error.

use shared::{validate_required_fields, AdvisoryReport, AdvisoryRequest};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::{RecommendationClient, WeatherClient};

/// Orchestrates the advisory pipeline for one request
#[derive(Clone)]
pub struct AdvisoryService {
    api_token: String,
    weather: WeatherClient,
    recommendation: RecommendationClient,
}

impl AdvisoryService {
    /// Create the service from application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            api_token: config.auth.api_token.clone(),
            weather: WeatherClient::new(&config.weather),
            recommendation: RecommendationClient::new(&config.recommendation),
        }
    }

    /// Create the service from pre-built clients (for testing)
    pub fn with_clients(
        api_token: impl Into<String>,
        weather: WeatherClient,
        recommendation: RecommendationClient,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            weather,
            recommendation,
        }
    }

    /// Run the full pipeline for one advisory request.
    pub async fn handle(&self, request: AdvisoryRequest) -> AppResult<AdvisoryReport> {
        self.authorize(request.token.as_deref())?;

        validate_required_fields(&request)
            .map_err(|message| AppError::Validation(message.to_string()))?;

        // Validated above; the defaults are unreachable.
        let location = request.location.unwrap_or_default();
        let date = request.date.unwrap_or_default();
        let requester_name = request.requester_name.unwrap_or_default();

        let weather = self.weather.fetch_weather(&location, &date).await?;
        let recommendation = self.recommendation.fetch_recommendation(&weather).await?;

        Ok(AdvisoryReport {
            requester_name,
            location,
            date,
            weather,
            recommendation,
        })
    }

    /// An absent token is a bad request; a present but different one fails
    /// authorization, even when empty.
    fn authorize(&self, token: Option<&str>) -> AppResult<()> {
        let token = token.ok_or(AppError::TokenMissing)?;
        if token != self.api_token {
            return Err(AppError::WrongToken);
        }
        Ok(())
    }
}
