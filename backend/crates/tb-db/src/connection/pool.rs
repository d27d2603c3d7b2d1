use crate::{DbError, Result};

use tb_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Opens (creating if needed) a file-backed pool in WAL mode.
///
/// `busy_timeout` is how long a writer waits on a locked database before the
/// statement fails with `SQLITE_BUSY`.
pub async fn open_pool(path: &Path, max_connections: u32, busy_timeout: Duration) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(busy_timeout)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(
        "Opened database {} (max_connections={max_connections})",
        path.display()
    );
    Ok(pool)
}

/// Single-connection in-memory pool. Each pool is its own database.
pub async fn open_in_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    debug!("Database migrations applied");
    Ok(())
}
