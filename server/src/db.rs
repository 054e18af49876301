//! SQLite pool setup and schema bootstrap.
//!
//! There is no migration framework: the single `todo` table is created on
//! start-up if it does not exist yet.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// How long a connection waits for another writer before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TODO_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todo (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT    NOT NULL,
        description TEXT,
        completed   BOOLEAN NOT NULL DEFAULT 0,
        urgency     INTEGER NOT NULL DEFAULT 3
    )
"#;

/// Open a connection pool for `config.url`, creating the database file if
/// needed.
///
/// An in-memory database lives and dies with its connection, so it is
/// pinned to a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = if is_in_memory(&config.url) {
        debug!("Opening in-memory database");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        debug!(
            "Opening database at {} (max connections: {})",
            config.url, config.max_connections
        );
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };

    Ok(pool)
}

/// Create the `todo` table if it is missing. Safe to call repeatedly.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TODO_TABLE).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}

/// Connect and bootstrap the schema in one step.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(config).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
