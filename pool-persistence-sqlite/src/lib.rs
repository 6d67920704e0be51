use std::str::FromStr;

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub mod entries;
pub mod roster;
pub mod settings;

pub use entries::SqliteEntryRepository;
pub use roster::SqliteRosterRepository;
pub use settings::SqliteSettingsRepository;

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS golfers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        salary INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        entry_name TEXT NOT NULL,
        picks TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )",
];

/// Opens a pool for `url`, e.g. `sqlite://pool.db`. The file is created if
/// it does not exist yet.
pub async fn create_db_pool(url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let conn_options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(conn_options)
        .await
}

/// A private in-memory database. Pinned to a single connection that is never
/// recycled, since every new connection would see an empty database.
pub async fn create_memory_pool() -> Result<Pool<Sqlite>, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

pub async fn create_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
