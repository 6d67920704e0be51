use chrono::{DateTime, Utc};
use pool_core::{Entry, GolferId};
use pool_server_app::domain::{EntryId, RepoError, entry::EntryRepository};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

pub struct SqliteEntryRepository {
    pool: Pool<Sqlite>,
}

impl SqliteEntryRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn entry_from_row(row: &SqliteRow) -> Result<(EntryId, Entry), RepoError> {
        let id: i64 = row.try_get("id").map_err(storage_error)?;
        let picks: String = row.try_get("picks").map_err(storage_error)?;
        let picks: Vec<i64> = serde_json::from_str(&picks).map_err(|e| {
            RepoError::StorageError(format!("entry {} has malformed picks: {}", id, e))
        })?;
        let created_at: i64 = row.try_get("created_at").map_err(storage_error)?;
        let created_at = DateTime::<Utc>::from_timestamp_millis(created_at).ok_or_else(|| {
            RepoError::StorageError(format!("entry {} has invalid timestamp", id))
        })?;

        Ok((
            EntryId(id),
            Entry {
                first_name: row.try_get("first_name").map_err(storage_error)?,
                last_name: row.try_get("last_name").map_err(storage_error)?,
                email: row.try_get("email").map_err(storage_error)?,
                entry_name: row.try_get("entry_name").map_err(storage_error)?,
                picks: picks.into_iter().map(GolferId).collect(),
                created_at,
            },
        ))
    }
}

fn storage_error(e: sqlx::Error) -> RepoError {
    RepoError::StorageError(e.to_string())
}

#[async_trait::async_trait]
impl EntryRepository for SqliteEntryRepository {
    async fn create_entry(&self, entry: Entry) -> Result<EntryId, RepoError> {
        let picks: Vec<i64> = entry.picks.iter().map(|id| id.0).collect();
        let picks = serde_json::to_string(&picks)
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        let res = sqlx::query(
            "INSERT INTO entries (first_name, last_name, email, entry_name, picks, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.first_name)
        .bind(&entry.last_name)
        .bind(&entry.email)
        .bind(&entry.entry_name)
        .bind(picks)
        .bind(entry.created_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(EntryId(res.last_insert_rowid()))
    }

    async fn list_entries(&self) -> Result<Vec<(EntryId, Entry)>, RepoError> {
        let rows = sqlx::query("SELECT * FROM entries ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter().map(Self::entry_from_row).collect()
    }

    async fn clear_entries(&self) -> Result<u64, RepoError> {
        let res = sqlx::query("DELETE FROM entries")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(res.rows_affected())
    }
}
