//! Database module - MySQL access using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool construction (`connection`)
//! - Environment-aware connection lifecycle management (`manager`)
//! - Typed access to the fixed schema (`schema`)

pub mod connection;
pub mod manager;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use manager::{ConnectPool, ConnectionManager, SqlxConnector};
pub use schema::{Database, TodoItem, TodoRepository};
