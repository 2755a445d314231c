//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the TaskNest
//! application. It provides concrete implementations for database access
//! and transactional email delivery.
//!
//! ## Architecture
//!
//! - **Database**: MySQL connection pooling via SQLx, plus the
//!   environment-aware connection lifecycle manager that decides whether a
//!   fresh pool is created or a cached handle is reused
//! - **Email**: Transactional email via the Resend API, with a mock
//!   implementation for development and testing

/// Database module - connection lifecycle, pooling, and schema access
pub mod database;

/// Email module - transactional email delivery
pub mod email;

// Re-export shared configuration for convenience
pub use tn_shared::config::{DatabaseConfig, EmailConfig, Environment};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// The underlying driver could not establish or use a connection
    #[error("Connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Configuration error (malformed URL, missing environment variable)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The email API rejected the message
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// HTTP transport failure reaching an external service
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
