//! Resend mailer implementation
//!
//! Sends transactional email through the Resend HTTP API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use pl_core::services::auth::EmailServiceTrait;
use pl_shared::config::EmailConfig;

use crate::InfrastructureError;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Request body for the Resend send-email endpoint
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

/// Response body of a successful send
#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Mailer backed by the Resend API
pub struct ResendEmailService {
    client: reqwest::Client,
    api_key: String,
    from_address: String,
}

impl ResendEmailService {
    /// Create a new Resend mailer from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "RESEND_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Email(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailServiceTrait for ResendEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, String> {
        let request = SendEmailRequest {
            from: &self.from_address,
            to: vec![to],
            subject,
            html: html_body,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("resend request failed: {}", e);
                format!("resend request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("resend returned {}: {}", status, body);
            return Err(format!("resend returned {}", status));
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse resend response: {}", e))?;

        debug!(message_id = %body.id, "verification email dispatched");
        Ok(body.id)
    }
}
