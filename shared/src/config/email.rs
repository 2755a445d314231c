//! Transactional email configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the Resend transactional email API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Resend API key
    pub api_key: String,

    /// Default sender address, used when a message does not set one
    pub from: String,

    /// Base URL of the Resend API
    ///
    /// Overridable so integration tests can point at a local stub.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Create a new configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the default sender address
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Point the client at a different API endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from: String::from("TaskNest <no-reply@tasknest.app>"),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    String::from("https://api.resend.com")
}

fn default_request_timeout() -> u64 {
    30
}
