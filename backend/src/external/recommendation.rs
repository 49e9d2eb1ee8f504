//! Chat-completion client for gardening recommendations
//!
//! Sends a weather summary to the Mistral chat-completion API and extracts
//! the generated advice

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{value_as_text, WeatherSnapshot};

use crate::config::RecommendationConfig;
use crate::error::{AppError, AppResult};

/// Model used for every completion request
const MODEL: &str = "mistral-tiny";

/// Upper bound on generated tokens; the answer is expected to be short
const MAX_TOKENS: u32 = 150;

/// Chat-completion API client
#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    api_key: String,
    api_endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl RecommendationClient {
    /// Create a new RecommendationClient
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_endpoint: config.api_endpoint.clone(),
        }
    }

    /// Create a client with a custom endpoint (for testing)
    pub fn with_endpoint(api_key: impl Into<String>, api_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_endpoint: api_endpoint.into(),
        }
    }

    /// Ask the model whether the garden can be treated under these
    /// conditions, returning the first choice's text.
    pub async fn fetch_recommendation(&self, weather: &WeatherSnapshot) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(weather),
            }],
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::Internal(format!("Recommendation API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status,
                message: format!("Error fetching AI recommendation: {}", body),
            });
        }

        let data: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse recommendation response: {}", e))
        })?;

        data.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::Internal("Recommendation response contained no choices".to_string())
            })
    }
}

/// Render the fixed prompt template for one weather snapshot.
fn build_prompt(weather: &WeatherSnapshot) -> String {
    format!(
        "\
На основі цієї погоди:
- Температура: {}°C
- Вітер: {} км/год
- Вологість: {}%
- Умови: {}

Дай рекомендації щодо обробки саду:
Чи можна в цей день обробляти сад?
Чи можна оприскувати дерева від хвороб і шкідників?
Давай коротку відповідь.",
        value_as_text(&weather.temp_c),
        value_as_text(&weather.wind_kph),
        value_as_text(&weather.humidity),
        value_as_text(&weather.conditions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::NOT_AVAILABLE;

    #[test]
    fn test_prompt_embeds_weather_fields() {
        let weather = WeatherSnapshot::from_day(&json!({
            "temp": 21.5,
            "windspeed": 14.0,
            "humidity": 66,
            "conditions": "Partially cloudy",
        }));

        let prompt = build_prompt(&weather);
        assert!(prompt.contains("Температура: 21.5°C"));
        assert!(prompt.contains("Вітер: 14.0 км/год"));
        assert!(prompt.contains("Вологість: 66%"));
        assert!(prompt.contains("Умови: Partially cloudy"));
        assert!(prompt.contains("Давай коротку відповідь."));
    }

    #[test]
    fn test_prompt_renders_sentinel_without_quotes() {
        let weather = WeatherSnapshot::from_day(&json!({}));

        let prompt = build_prompt(&weather);
        assert!(prompt.contains(&format!("Температура: {}°C", NOT_AVAILABLE)));
        assert!(!prompt.contains('"'));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "Яка погода?".to_string(),
            }],
            max_tokens: MAX_TOKENS,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], json!("mistral-tiny"));
        assert_eq!(body["max_tokens"], json!(150));
        assert_eq!(body["messages"][0]["role"], json!("user"));
        assert_eq!(body["messages"][0]["content"], json!("Яка погода?"));
    }

    #[test]
    fn test_response_first_choice_extraction() {
        let parsed: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Так, можна." } },
                { "message": { "role": "assistant", "content": "ignored" } },
            ],
        }))
        .unwrap();

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content);
        assert_eq!(content.as_deref(), Some("Так, можна."));
    }
}
