use std::collections::BTreeMap;

use pool_server_app::domain::{RepoError, settings::SettingsRepository};
use sqlx::{Pool, Sqlite};

pub struct SqliteSettingsRepository {
    pool: Pool<Sqlite>,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> RepoError {
    RepoError::StorageError(e.to_string())
}

#[async_trait::async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn get_settings(&self) -> Result<BTreeMap<String, String>, RepoError> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().collect())
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn clear_setting_if_equals(
        &self,
        key: &str,
        expected: &str,
    ) -> Result<bool, RepoError> {
        let res = sqlx::query("UPDATE settings SET value = '' WHERE key = ? AND value = ?")
            .bind(key)
            .bind(expected)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(res.rows_affected() > 0)
    }
}
