//! Schema preparation
//!
//! The items table is created on startup if missing. There is no migration
//! framework; the schema is one flat table.

use sqlx::SqlitePool;
use tracing::info;

use super::DbError;

/// Create the items table if it does not exist.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            Id INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            IsComplete BOOLEAN NOT NULL DEFAULT FALSE
        );
    "#,
    )
    .execute(pool)
    .await?;

    info!("database schema ready");
    Ok(())
}
