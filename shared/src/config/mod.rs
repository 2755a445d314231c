//! Configuration module organized by concern
//!
//! - `database` - Connection URL and pool settings
//! - `email` - Resend API credentials and sender defaults
//! - `environment` - Runtime environment detection

pub mod database;
pub mod email;
pub mod environment;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
