//! Shared configuration types for the TaskNest data layer
//!
//! This crate holds the plain configuration types consumed by the
//! infrastructure crate:
//! - Runtime environment detection (`Environment`)
//! - Database connection settings (`DatabaseConfig`)
//! - Transactional email settings (`EmailConfig`)
//!
//! It performs no I/O beyond reading process environment variables.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, EmailConfig, Environment};
