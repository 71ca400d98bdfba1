//! Item repository
//!
//! Four operations, each a single parameterized statement. Update and
//! delete report affected-row counts; the caller turns a zero count into
//! a not-found response.

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use crate::models::{Item, ItemName};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Item repository bound to one pooled connection.
///
/// Acquired per request; dropping the repo returns the connection to the
/// pool on every exit path.
pub struct ItemRepo {
    conn: PoolConnection<Sqlite>,
}

impl ItemRepo {
    /// Check a connection out of the pool for the current request.
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self {
            conn: pool.acquire().await?,
        })
    }

    /// All items, in storage order.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(items)
    }

    /// Insert a new item with `IsComplete = false`, returning the assigned id.
    ///
    /// The caller has already rejected blank names; this statement is never
    /// issued for them.
    pub async fn create(&mut self, name: &ItemName) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO items (Name, IsComplete) VALUES (?, false)")
            .bind(name.as_str())
            .execute(&mut *self.conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Update only the completion flag, returning the affected-row count
    /// (0 or 1, since `Id` is the primary key).
    pub async fn set_complete(&mut self, id: i64, is_complete: bool) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE items SET IsComplete = ? WHERE Id = ?")
            .bind(is_complete)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete the row matching `id`, returning the affected-row count.
    pub async fn delete(&mut self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM items WHERE Id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::db::{create_pool, migrations};

    async fn test_pool() -> (TempDir, SqlitePool) {
        let dir = TempDir::new().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("items.db").display());
        let pool = create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("schema");
        (dir, pool)
    }

    fn name(s: &str) -> ItemName {
        ItemName::new(s).expect("valid name")
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let (_dir, pool) = test_pool().await;
        let mut repo = ItemRepo::acquire(&pool).await.unwrap();

        assert_eq!(repo.create(&name("Buy milk")).await.unwrap(), 1);
        assert_eq!(repo.create(&name("Walk dog")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_returns_items_in_storage_order() {
        let (_dir, pool) = test_pool().await;
        let mut repo = ItemRepo::acquire(&pool).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());

        repo.create(&name("first")).await.unwrap();
        repo.create(&name("second")).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "first");
        assert_eq!(items[1].name, "second");
        assert!(!items[0].is_complete);
    }

    #[tokio::test]
    async fn set_complete_reports_affected_rows() {
        let (_dir, pool) = test_pool().await;
        let mut repo = ItemRepo::acquire(&pool).await.unwrap();

        let id = repo.create(&name("Buy milk")).await.unwrap();

        assert_eq!(repo.set_complete(id, true).await.unwrap(), 1);
        // Same value again still touches the row
        assert_eq!(repo.set_complete(id, true).await.unwrap(), 1);
        assert_eq!(repo.set_complete(9999, true).await.unwrap(), 0);

        let items = repo.list().await.unwrap();
        assert!(items[0].is_complete);
        assert_eq!(items[0].name, "Buy milk");
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let (_dir, pool) = test_pool().await;
        let mut repo = ItemRepo::acquire(&pool).await.unwrap();

        let id = repo.create(&name("Buy milk")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
