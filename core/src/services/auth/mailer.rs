//! Trait for mailer integration

use async_trait::async_trait;

/// Trait for the external mailer collaborator
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an HTML email.
    ///
    /// Returns the provider's message id on success, or an error message.
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, String>;
}
