//! Mock mailer implementation
//!
//! Logs emails to the console instead of sending them. Used in development
//! and in the integration tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use pl_core::services::auth::EmailServiceTrait;

/// Mock mailer for development and testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking the number of emails sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of emails sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, String> {
        if self.simulate_failure {
            warn!("mock mailer simulating delivery failure for {}", to);
            return Err("simulated email delivery failure".to_string());
        }

        let message_id = format!("mock-{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);

        info!(
            to = %to,
            subject = %subject,
            body_len = html_body.len(),
            message_id = %message_id,
            "mock email sent"
        );

        Ok(message_id)
    }
}
