//! Mailer implementations.

pub mod mock;
pub mod resend;

pub use mock::MockEmailService;
pub use resend::ResendEmailService;

use async_trait::async_trait;

use pl_core::services::auth::EmailServiceTrait;
use pl_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Provider-selected mailer, chosen once at startup from configuration
pub enum AnyEmailService {
    Resend(ResendEmailService),
    Mock(MockEmailService),
}

impl AnyEmailService {
    /// Build the mailer named by `config.provider`
    pub fn from_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        match config.provider.as_str() {
            "resend" => Ok(Self::Resend(ResendEmailService::new(config)?)),
            "mock" => Ok(Self::Mock(MockEmailService::new())),
            other => Err(InfrastructureError::Config(format!(
                "unknown email provider: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl EmailServiceTrait for AnyEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, String> {
        match self {
            Self::Resend(service) => service.send_email(to, subject, html_body).await,
            Self::Mock(service) => service.send_email(to, subject, html_body).await,
        }
    }
}
