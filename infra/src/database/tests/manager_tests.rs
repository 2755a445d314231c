//! Unit tests for the connection lifecycle manager
//!
//! A counting fake connector stands in for physical pool creation so the
//! tests can assert exactly how many creations a call sequence performs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use tn_shared::config::{DatabaseConfig, Environment};

use crate::database::manager::{ConnectPool, ConnectionManager};
use crate::InfraError;

/// Fake connector that counts successful creations
#[derive(Clone, Default)]
struct CountingConnector {
    creations: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
    delay_ms: u64,
}

impl CountingConnector {
    fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectPool for CountingConnector {
    type Handle = Arc<usize>;

    async fn connect(&self, _config: &DatabaseConfig) -> Result<Self::Handle, InfraError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(InfraError::Config("connection refused".to_string()));
        }
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        let serial = self.creations.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(serial))
    }
}

fn manager_for(env: Environment, connector: CountingConnector) -> ConnectionManager<CountingConnector> {
    ConnectionManager::with_connector(env, DatabaseConfig::default(), connector)
}

#[tokio::test]
async fn test_non_production_creates_once_and_reuses() {
    let connector = CountingConnector::default();
    let manager = manager_for(Environment::Development, connector.clone());

    let first = manager.acquire().await.unwrap();
    let second = manager.acquire().await.unwrap();
    let third = manager.acquire().await.unwrap();

    assert_eq!(connector.creations(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert!(manager.is_cached());
}

#[tokio::test]
async fn test_staging_takes_the_cached_path() {
    let connector = CountingConnector::default();
    let manager = manager_for(Environment::Staging, connector.clone());

    manager.acquire().await.unwrap();
    manager.acquire().await.unwrap();

    assert_eq!(connector.creations(), 1);
}

#[tokio::test]
async fn test_production_creates_a_fresh_handle_per_call() {
    let connector = CountingConnector::default();
    let manager = manager_for(Environment::Production, connector.clone());

    let first = manager.acquire().await.unwrap();
    let second = manager.acquire().await.unwrap();

    assert_eq!(connector.creations(), 2);
    assert!(!Arc::ptr_eq(&first, &second));
    // Production never touches the slot
    assert!(!manager.is_cached());
}

#[tokio::test]
async fn test_failed_creation_leaves_slot_empty() {
    let connector = CountingConnector::default();
    connector.set_failing(true);
    let manager = manager_for(Environment::Development, connector.clone());

    let result = manager.acquire().await;
    assert!(matches!(result, Err(InfraError::Config(_))));
    assert!(!manager.is_cached());
    assert_eq!(connector.creations(), 0);

    // A corrected configuration can still populate the slot
    connector.set_failing(false);
    let handle = manager.acquire().await.unwrap();
    assert!(manager.is_cached());
    assert_eq!(connector.creations(), 1);

    let again = manager.acquire().await.unwrap();
    assert!(Arc::ptr_eq(&handle, &again));
    assert_eq!(connector.creations(), 1);
}

#[tokio::test]
async fn test_concurrent_first_acquire_creates_once() {
    let connector = CountingConnector {
        delay_ms: 20,
        ..Default::default()
    };
    let manager = manager_for(Environment::Development, connector.clone());

    let (a, b) = tokio::join!(manager.acquire(), manager.acquire());
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(connector.creations(), 1);
    assert!(Arc::ptr_eq(&a, &b));
}

#[tokio::test]
async fn test_manager_exposes_environment_and_config() {
    let manager = manager_for(Environment::Production, CountingConnector::default());
    assert_eq!(manager.environment(), Environment::Production);
    assert_eq!(manager.config().max_connections, 10);
}
