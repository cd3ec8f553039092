#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};

pub mod config;
mod r#impl;
mod types;

use config::SqliteConfig;

/// SQLite implementation of the product repository.
///
/// This struct provides separate reader and writer connection pools to a
/// SQLite database. The separation of read and write connections allows for
/// better concurrency control and follows SQLite best practices for
/// Write-Ahead Logging (WAL) mode.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// For an in-memory database both handles point at the writer pool, since a
/// private in-memory database cannot be shared between pools safely.
///
/// # Example
///
/// ```no_run
/// # use store_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Db::open(&SqliteConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing`
    /// is true) and applies all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection fails or a migration fails to
    /// apply.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let options = match &config.database_path {
            Some(path) => sqlite::SqliteConnectOptions::new().filename(path),
            None => sqlite::SqliteConnectOptions::from_str("sqlite::memory:")?,
        }
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .journal_mode(sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlite::SqliteSynchronous::Normal)
        .pragma("journal_size_limit", "27103364")
        .pragma("mmap_size", "134217728")
        .pragma("temp_store", "memory")
        .create_if_missing(config.create_if_missing);

        // The writer never closes its connection, otherwise an in-memory
        // database would vanish when the pool recycles it.
        let writer = sqlite::SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options.clone())
            .await?;

        let reader = if config.database_path.is_some() {
            sqlite::SqlitePoolOptions::new()
                .max_connections(config.max_readers)
                .connect_with(options)
                .await?
        } else {
            writer.clone()
        };

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&writer).await?;

        tracing::debug!(
            path = ?config.database_path,
            "opened product database"
        );

        Ok(Self { reader, writer })
    }
}
