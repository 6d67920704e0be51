use std::sync::Arc;

use pool_core::ContestRules;
use pool_persistence_sqlite::{
    SqliteEntryRepository, SqliteRosterRepository, SqliteSettingsRepository, create_memory_pool,
};
use pool_server_app::{build_application, domain::editor::RulesEditorConfig};
use pool_storage_fs::FsBackgroundStorage;
use tempfile::TempDir;

use crate::AppState;

pub const PUBLIC_BASE_URL: &str = "http://pool.test";

/// App state over an in-memory database and a scratch backgrounds directory.
pub async fn test_state(admin_token: Option<&str>) -> (AppState, TempDir) {
    let pool = create_memory_pool().await.unwrap();
    let dir = tempfile::tempdir().unwrap();

    let app = build_application(
        Arc::new(SqliteRosterRepository::new(pool.clone())),
        Arc::new(SqliteEntryRepository::new(pool.clone())),
        Arc::new(SqliteSettingsRepository::new(pool)),
        Arc::new(FsBackgroundStorage::new(dir.path(), PUBLIC_BASE_URL)),
        ContestRules::default(),
        RulesEditorConfig::default(),
    );
    let state = AppState {
        app: Arc::new(app),
        admin_token: admin_token.map(Arc::from),
    };
    (state, dir)
}

/// Adds one golfer per salary and returns their ids in the same order.
pub async fn seed_golfers(state: &AppState, salaries: &[u32]) -> Vec<i64> {
    let mut ids = Vec::new();
    for (i, salary) in salaries.iter().enumerate() {
        let golfer = state
            .app
            .golfer_add_use_case
            .add_golfer(&format!("Golfer {}", i + 1), i64::from(*salary))
            .await
            .unwrap();
        ids.push(golfer.id.0);
    }
    ids
}
