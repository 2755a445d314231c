//! Resend email delivery
//!
//! Performs a single HTTP call to the Resend API per message. Delivery
//! errors are surfaced verbatim to the caller; there is no retry or
//! backoff in this layer.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use tn_shared::config::EmailConfig;

use crate::email::email_service::{is_valid_address, mask_email, EmailService};
use crate::email::message::EmailMessage;
use crate::InfraError;

/// Email service backed by the Resend HTTP API
pub struct ResendMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

/// Successful response from `POST /emails`
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Error body returned by the Resend API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ResendMailer {
    /// Create a new Resend mailer
    pub fn new(config: EmailConfig) -> Result<Self, InfraError> {
        if config.api_key.is_empty() {
            return Err(InfraError::Config(
                "Resend API key must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Resend mailer initialized with sender: {}",
            mask_email(&config.from)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    ///
    /// Requires `RESEND_API_KEY`; `EMAIL_FROM` and `RESEND_BASE_URL` are
    /// optional overrides of the configured defaults.
    pub fn from_env() -> Result<Self, InfraError> {
        let api_key = std::env::var("RESEND_API_KEY")
            .map_err(|_| InfraError::Config("RESEND_API_KEY not set".to_string()))?;

        let mut config = EmailConfig::new(api_key);
        if let Ok(from) = std::env::var("EMAIL_FROM") {
            config = config.with_from(from);
        }
        if let Ok(base_url) = std::env::var("RESEND_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        Self::new(config)
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailService for ResendMailer {
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

        // An empty sender means "use the configured default"
        let mut payload = message.clone();
        if payload.from.is_empty() {
            payload.from = self.config.from.clone();
        }

        debug!(
            recipients = payload.to.len(),
            subject = %payload.subject,
            "Sending email via Resend"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: SendResponse = response.json().await?;
            info!(
                message_id = %body.id,
                to = %mask_email(&payload.to[0]),
                "Email sent"
            );
            return Ok(body.id);
        }

        let raw = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&raw)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(raw);

        error!(status = %status, "Resend API rejected the message: {}", detail);
        Err(InfraError::Delivery(format!(
            "Resend API returned {}: {}",
            status, detail
        )))
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }
}
