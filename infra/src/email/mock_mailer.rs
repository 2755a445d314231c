//! Mock email delivery
//!
//! Records messages instead of sending them, for development and tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::email::email_service::{is_valid_address, mask_email, EmailService};
use crate::email::message::EmailMessage;
use crate::InfraError;

/// Mock email service
///
/// This implementation:
/// - Validates addresses like a real provider would
/// - Records every accepted message for later inspection
/// - Generates mock message ids
/// - Can simulate delivery failures
#[derive(Clone)]
pub struct MockMailer {
    /// Messages accepted so far; shared across clones
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    /// Whether to fail every send (for testing error paths)
    simulate_failure: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: true,
        }
    }

    /// Number of messages accepted so far
    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("mock mailer lock poisoned").len()
    }

    /// Copies of the accepted messages, in send order
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .expect("mock mailer lock poisoned")
            .clone()
    }

    /// Forget all recorded messages
    pub fn reset(&self) {
        self.sent.lock().expect("mock mailer lock poisoned").clear();
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, InfraError> {
        if message.to.is_empty() {
            return Err(InfraError::Delivery(
                "Message has no recipients".to_string(),
            ));
        }
        for recipient in &message.to {
            if !is_valid_address(recipient) {
                return Err(InfraError::Delivery(format!(
                    "Invalid recipient address: {}",
                    mask_email(recipient)
                )));
            }
        }

        if self.simulate_failure {
            warn!(
                "Mock mailer simulating failure for: {}",
                mask_email(&message.to[0])
            );
            return Err(InfraError::Delivery(
                "Simulated delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        self.sent
            .lock()
            .expect("mock mailer lock poisoned")
            .push(message.clone());

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(&message.to[0]),
            message_id = %message_id,
            subject = %message.subject,
            "Email sent (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
