//! `SQLite` connection pool setup and schema initialization.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;
use crate::schema::SCHEMA;

const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:cadastro.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound of pooled connections.
    pub max_connections: u32,
}

impl Config {
    /// Configuration for `database_url` with a single pooled connection.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and creates every missing table.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        let database = Database::connect(&self.database_url, self.max_connections).await?;
        database.initialize_schema().await?;
        Ok(database)
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool with foreign keys enforced on every connection.
    ///
    /// Connections never expire so that an in-memory database lives as long
    /// as the pool.
    async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        tracing::debug!(database_url, max_connections, "connected to sqlite");
        Ok(Self { pool })
    }

    /// Create all tables and indexes that do not exist yet. Running it again
    /// on an initialized database changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Schema`] if any statement fails.
    pub async fn initialize_schema(&self) -> Result<(), StorageError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Schema)?;
        tracing::debug!("schema initialized");
        Ok(())
    }

    /// Names of the user tables, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the catalog query fails.
    pub async fn table_names(&self) -> Result<Vec<String>, StorageError> {
        let names = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_create_pool_and_schema_when_using_memory_db() {
        let db = Config::new("sqlite::memory:").build().await.unwrap();

        let names = db.table_names().await.unwrap();
        assert_eq!(
            names,
            vec!["cargo", "funcao", "funcionario", "usuario", "usuario_sistema"]
        );
    }

    #[tokio::test]
    async fn should_keep_data_when_schema_initialized_twice() {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        sqlx::query("INSERT INTO funcao (nome_funcao) VALUES ('Dev')")
            .execute(db.pool())
            .await
            .unwrap();

        db.initialize_schema().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM funcao")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn should_enforce_foreign_keys_on_connections() {
        let db = Config::new("sqlite::memory:").build().await.unwrap();

        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn should_fail_when_database_directory_missing() {
        let result = Config::new("sqlite:/nonexistent-cadastro-dir/nested/cadastro.db")
            .build()
            .await;
        assert!(result.is_err());
    }
}
