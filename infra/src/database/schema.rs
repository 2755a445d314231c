//! Typed access to the fixed TaskNest schema
//!
//! The schema is a single `todo_items` table. [`Database`] is the handle
//! handed to the rest of the application: it exposes the raw pool for
//! direct use and a typed repository bound to the schema. Schema evolution
//! (migrations) is handled outside this crate.

use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use crate::database::connection::DatabasePool;
use crate::InfraError;

/// DDL for the `todo_items` table
///
/// Kept as the canonical description of the fixed schema; integration tests
/// use it to set up a scratch database.
pub const TODO_ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS todo_items (
        id CHAR(36) PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        is_completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL
    )
"#;

/// Connection handle combining the raw pool with the typed schema view
#[derive(Clone)]
pub struct Database {
    pool: DatabasePool,
}

impl Database {
    /// Bind the schema view to a connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Raw SQLx pool for direct queries and transactions
    pub fn pool(&self) -> &MySqlPool {
        self.pool.pool()
    }

    /// The wrapped pool with its health-check and shutdown helpers
    pub fn inner(&self) -> &DatabasePool {
        &self.pool
    }

    /// Typed repository over the `todo_items` table
    pub fn todos(&self) -> TodoRepository {
        TodoRepository::new(self.pool.pool().clone())
    }
}

/// A row of the `todo_items` table
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// MySQL repository for todo items
pub struct TodoRepository {
    pool: MySqlPool,
}

impl TodoRepository {
    /// Create a repository over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a `TodoItem`
    fn row_to_todo(row: &MySqlRow) -> Result<TodoItem, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".into(),
            source: Box::new(e),
        })?;

        Ok(TodoItem {
            id,
            title: row.try_get("title")?,
            is_completed: row.try_get("is_completed")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// Insert a new, uncompleted todo item
    pub async fn insert(&self, title: &str) -> Result<TodoItem, InfraError> {
        let item = TodoItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            is_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO todo_items (id, title, is_completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_string())
        .bind(&item.title)
        .bind(item.is_completed)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %item.id, "Inserted todo item");
        Ok(item)
    }

    /// Fetch a single item by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, is_completed, created_at, updated_at
            FROM todo_items
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_todo(&row)?)),
            None => Ok(None),
        }
    }

    /// List all items, newest first
    pub async fn list(&self) -> Result<Vec<TodoItem>, InfraError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, is_completed, created_at, updated_at
            FROM todo_items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Self::row_to_todo(row).map_err(InfraError::Connection))
            .collect()
    }

    /// Mark an item completed or uncompleted
    ///
    /// Returns false when no row with the given id exists.
    pub async fn set_completed(&self, id: Uuid, completed: bool) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_items
            SET is_completed = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(completed)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an item, returning whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
