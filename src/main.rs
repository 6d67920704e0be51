use std::sync::Arc;

use log::info;
use pool_core::ContestRules;
use pool_persistence_sqlite::{
    SqliteEntryRepository, SqliteRosterRepository, SqliteSettingsRepository, create_db_pool,
    create_schema,
};
use pool_server_api::HttpConfig;
use pool_server_app::{build_application, domain::editor::RulesEditorConfig};
use pool_storage_fs::FsBackgroundStorage;

use crate::config::ServerConfig;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let _log_handle = logs::init_logger(&config.log).expect("Failed to initialize logger");

    let pool = create_db_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    create_schema(&pool)
        .await
        .expect("Failed to create database schema");

    tokio::fs::create_dir_all(&config.backgrounds_dir)
        .await
        .expect("Failed to create backgrounds directory");

    let app = Arc::new(build_application(
        Arc::new(SqliteRosterRepository::new(pool.clone())),
        Arc::new(SqliteEntryRepository::new(pool.clone())),
        Arc::new(SqliteSettingsRepository::new(pool.clone())),
        Arc::new(FsBackgroundStorage::new(
            config.backgrounds_dir.clone(),
            &config.public_base_url,
        )),
        ContestRules::default(),
        RulesEditorConfig::default(),
    ));

    info!(
        "Starting golf pool server (salary cap ${}, {} picks)",
        app.rules.salary_cap, app.rules.required_picks
    );

    let http_config = HttpConfig {
        host: config.http_host,
        port: config.http_port,
        backgrounds_dir: config.backgrounds_dir,
        max_upload_bytes: config.max_upload_bytes,
        admin_token: config.admin_token,
    };
    if let Err(e) = pool_server_api::run(app, http_config, shutdown_signal()).await {
        log::error!("HTTP server failed: {}", e);
    }

    pool.close().await;
    info!("Server stopped");
}
