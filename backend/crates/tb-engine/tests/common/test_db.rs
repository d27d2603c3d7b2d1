use tb_db::{open_in_memory_pool, open_pool, run_migrations};

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = open_in_memory_pool()
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed WAL pool with several connections, for tests that race
/// writers against each other.
pub async fn create_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let pool = open_pool(
        &dir.join("taskboard.db"),
        max_connections,
        Duration::from_secs(5),
    )
    .await
    .expect("Failed to create file pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
