//! Email service interface
//!
//! Defines the trait implemented by every mail provider, plus small
//! helpers for address validation and log redaction.

use async_trait::async_trait;

use crate::email::message::EmailMessage;
use crate::InfraError;

/// Email service trait for sending transactional messages
///
/// Implementations include:
/// - Resend HTTP API
/// - Mock implementation for development and testing
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a single email message
    ///
    /// Returns the provider's message id on success. Any provider error is
    /// surfaced verbatim as `InfraError::Delivery`; no retries happen here.
    async fn send(&self, message: &EmailMessage) -> Result<String, InfraError>;

    /// Name of the delivery provider (e.g. "Resend", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `jane@example.com` becomes `j***@example.com`.
pub fn mask_email(address: &str) -> String {
    let bare = bare_address(address);
    match bare.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}

/// Validate an email address
///
/// Accepts both bare addresses (`jane@example.com`) and display-name form
/// (`Jane Doe <jane@example.com>`). This is a plausibility check, not RFC
/// 5322 parsing; the provider performs the authoritative validation.
pub fn is_valid_address(address: &str) -> bool {
    let bare = bare_address(address);
    let Some((local, domain)) = bare.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !tld.is_empty() && !bare.contains(char::is_whitespace)
}

/// Strip the display-name wrapper, if any
fn bare_address(address: &str) -> &str {
    match (address.rfind('<'), address.rfind('>')) {
        (Some(open), Some(close)) if open < close => &address[open + 1..close],
        _ => address.trim(),
    }
}
