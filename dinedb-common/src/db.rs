//! SQLite connection setup
//!
//! The database file is owned by whoever seeds it; this crate never creates
//! or migrates it.

use crate::config::PoolSettings;
use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Open a connection pool on an existing database file
///
/// Fails with [`Error::DatabaseNotFound`] rather than creating an empty
/// store. With `read_only` the connections use SQLite `mode=ro`.
pub async fn connect(db_path: &Path, read_only: bool, pool: PoolSettings) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::DatabaseNotFound(db_path.to_path_buf()));
    }

    debug!(
        "Opening database pool: {} connections, acquire_timeout={:?}, read_only={}",
        pool.max_connections, pool.acquire_timeout, read_only
    );

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(read_only)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(pool.max_connections)
        .acquire_timeout(pool.acquire_timeout)
        .connect_with(options)
        .await?;

    info!(
        "Opened database {} ({})",
        db_path.display(),
        if read_only { "read-only" } else { "read-write" }
    );

    Ok(pool)
}
