use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    routing::{get, get_service, post},
};
use log::info;
use pool_server_app::Application;
use tower_http::services::ServeDir;

use crate::error::ServiceError;

mod auth;
mod backgrounds;
mod contest;
mod entries;
pub mod error;
mod golfers;
mod settings;
mod submit;

#[cfg(test)]
mod testing;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
    pub admin_token: Option<Arc<str>>,
}

pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub backgrounds_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub admin_token: Option<String>,
}

pub fn router(state: AppState, config: &HttpConfig) -> Router {
    Router::new()
        .route("/submit", post(submit::submit_entry))
        .route("/contest", get(contest::get_contest))
        .route(
            "/golfers",
            get(golfers::list_golfers)
                .post(golfers::add_golfer)
                .delete(golfers::remove_golfer),
        )
        .route("/golfers/batch", post(golfers::add_batch))
        .route("/golfers/import", post(golfers::import_csv))
        .route("/golfers/reset", post(golfers::reset_golfers))
        .route(
            "/settings",
            get(settings::get_settings).post(settings::update_setting),
        )
        .route("/settings/editor", get(settings::get_editor_config))
        .route("/entries", get(entries::list_entries))
        .route("/entries/export", get(entries::export_entries))
        .route("/entries/reset", post(entries::reset_entries))
        .route("/backgrounds", get(backgrounds::list_backgrounds))
        .route("/backgrounds/upload", post(backgrounds::upload_background))
        .route("/backgrounds/activate", post(backgrounds::activate_background))
        .route("/backgrounds/delete", post(backgrounds::delete_background))
        .nest("/storage/backgrounds", storage_routes(&config.backgrounds_dir))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
}

/// Static background files. Missing files and non-GET methods answer with
/// the same JSON errors as the rest of the API.
fn storage_routes(dir: &Path) -> Router<AppState> {
    let files = ServeDir::new(dir).not_found_service(not_found.into_service());
    Router::new()
        .route("/{*key}", get_service(files))
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed() -> ServiceError {
    ServiceError::MethodNotAllowed("Method not allowed".to_string())
}

async fn not_found() -> ServiceError {
    ServiceError::NotFound("No such route".to_string())
}

pub async fn run(
    app: Arc<Application>,
    config: HttpConfig,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if config.admin_token.is_none() {
        log::warn!("No admin token configured, admin routes are open to everyone");
    }
    let state = AppState {
        app,
        admin_token: config.admin_token.as_deref().map(Arc::from),
    };
    let router = router(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    info!("HTTP server listening on {}:{}", config.host, config.port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP server shut down gracefully");
    Ok(())
}
