//! Email module - transactional email delivery
//!
//! A thin delivery layer: one trait, one real provider (Resend), one mock.
//! Each send is a single outbound API call; retry policy is the caller's
//! concern.

pub mod email_service;
pub mod message;
pub mod mock_mailer;
pub mod resend;

// Re-export commonly used types
pub use email_service::{is_valid_address, mask_email, EmailService};
pub use message::{Attachment, EmailMessage, Tag};
pub use mock_mailer::MockMailer;
pub use resend::ResendMailer;

#[cfg(test)]
mod tests;

use tn_shared::config::EmailConfig;

use crate::InfraError;

/// Create a mailer from configuration
///
/// Falls back to the mock mailer when no API key is configured, so
/// development environments work without Resend credentials.
pub fn create_mailer(config: &EmailConfig) -> Result<Box<dyn EmailService>, InfraError> {
    if config.api_key.is_empty() {
        tracing::warn!("No email API key configured, using mock mailer");
        return Ok(Box::new(MockMailer::new()));
    }
    Ok(Box::new(ResendMailer::new(config.clone())?))
}
