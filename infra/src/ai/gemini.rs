//! Gemini completion service implementation
//!
//! Calls the Google Generative Language HTTP API to produce a completion
//! for a plain-text prompt.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use pl_core::services::chat::CompletionServiceTrait;
use pl_shared::config::AiConfig;

use crate::InfrastructureError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Completion service backed by the Gemini API
pub struct GeminiCompletionService {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiCompletionService {
    /// Create a new Gemini client from configuration
    pub fn new(config: &AiConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "GEMINI_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Completion(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionServiceTrait for GeminiCompletionService {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("gemini request failed: {}", e);
                format!("gemini request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("gemini returned {}: {}", status, body);
            return Err(format!("gemini returned {}", status));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse gemini response: {}", e))?;

        // first candidate, first part; anything else is an empty reply
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        Ok(text)
    }
}
