//! Environment-aware connection lifecycle management
//!
//! During development the initialization path of the hosting process can be
//! re-entered many times (module reloads). Creating a physical pool on every
//! pass would leak connections until the server runs out. The
//! [`ConnectionManager`] therefore keeps a slot that is populated exactly
//! once per process in non-production environments; production processes
//! initialize once and get a fresh pool unconditionally.
//!
//! The slot is owned by the manager instance, not by a global. Whatever
//! layer performs initialization holds the manager for the process lifetime
//! and every re-entry goes through [`ConnectionManager::acquire`].

use async_trait::async_trait;
use tokio::sync::OnceCell;

use tn_shared::config::{DatabaseConfig, Environment};

use crate::database::connection::DatabasePool;
use crate::database::schema::Database;
use crate::InfraError;

/// Seam for physical pool creation
///
/// The production implementation is [`SqlxConnector`]. Tests substitute a
/// counting fake to verify how many physical creations a call sequence
/// performs.
#[async_trait]
pub trait ConnectPool: Send + Sync {
    /// Handle produced by a successful connection
    type Handle: Clone + Send + Sync;

    /// Establish a new physical connection pool
    async fn connect(&self, config: &DatabaseConfig) -> Result<Self::Handle, InfraError>;
}

/// Connects to MySQL through SQLx and binds the typed schema view
pub struct SqlxConnector;

#[async_trait]
impl ConnectPool for SqlxConnector {
    type Handle = Database;

    async fn connect(&self, config: &DatabaseConfig) -> Result<Self::Handle, InfraError> {
        let pool = DatabasePool::new(config.clone()).await?;
        Ok(Database::new(pool))
    }
}

/// Decides whether to create a fresh connection pool or reuse a cached one
///
/// - `Production`: every [`acquire`](Self::acquire) call creates a new pool.
///   A production process initializes once, so no caching is needed.
/// - Anything else: the first call populates the slot, every later call
///   clones the cached handle without touching the driver.
///
/// Concurrent first-time calls are serialized by the slot; even if two tasks
/// race into an empty slot, exactly one physical creation happens.
pub struct ConnectionManager<C: ConnectPool = SqlxConnector> {
    environment: Environment,
    config: DatabaseConfig,
    connector: C,
    slot: OnceCell<C::Handle>,
}

impl ConnectionManager<SqlxConnector> {
    /// Create a manager backed by the SQLx connector
    pub fn new(environment: Environment, config: DatabaseConfig) -> Self {
        Self::with_connector(environment, config, SqlxConnector)
    }

    /// Build a manager from process environment variables
    ///
    /// Loads `.env` if present, then reads the runtime environment and
    /// database settings. Intended to be called once from application
    /// startup.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        let config = DatabaseConfig::from_env();
        tracing::info!(%environment, "Initializing connection manager");
        Self::new(environment, config)
    }
}

impl<C: ConnectPool> ConnectionManager<C> {
    /// Create a manager with a custom connector
    pub fn with_connector(environment: Environment, config: DatabaseConfig, connector: C) -> Self {
        Self {
            environment,
            config,
            connector,
            slot: OnceCell::new(),
        }
    }

    /// Produce a ready-to-use connection handle
    ///
    /// In non-production environments repeated calls after the first are
    /// free of side effects on the underlying transport: the number of
    /// physical pools created equals the number of times an empty slot was
    /// observed, not the number of calls.
    ///
    /// A failed creation leaves the slot empty, so a later call (for
    /// example after fixing the configuration) can still populate it.
    pub async fn acquire(&self) -> Result<C::Handle, InfraError> {
        if self.environment.is_production() {
            return self.connector.connect(&self.config).await;
        }

        let handle = self
            .slot
            .get_or_try_init(|| async {
                tracing::debug!("Connection slot empty, creating pool");
                self.connector.connect(&self.config).await
            })
            .await?;

        Ok(handle.clone())
    }

    /// Whether the slot currently holds a handle
    pub fn is_cached(&self) -> bool {
        self.slot.initialized()
    }

    /// Environment this manager was constructed for
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Database configuration this manager connects with
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
