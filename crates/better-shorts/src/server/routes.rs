//! JSON endpoints, one per boundary operation.
//!
//! Every handler takes the service lock for its whole duration, so
//! requests are processed one at a time.

use better_shorts_core::{
    OperationResult, SettingsRecord, ShortcutRecord, ShortcutService, UpdateStatus,
};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// The boundary operations, serialized behind one lock.
    pub service: Arc<Mutex<ShortcutService>>,
}

/// Outcome of the export/import file prompt, as sent by the front-end.
#[derive(Debug, Default, Deserialize)]
pub struct FilePrompt {
    /// Chosen file. Absent means the suggested default was accepted.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// The user dismissed the prompt.
    #[serde(default)]
    pub canceled: bool,
}

impl FilePrompt {
    fn resolve(self, default: &Path) -> Option<PathBuf> {
        if self.canceled {
            return None;
        }
        Some(self.path.unwrap_or_else(|| default.to_path_buf()))
    }
}

/// Body of the autostart toggle.
#[derive(Debug, Deserialize)]
pub struct AutostartRequest {
    /// Desired state.
    pub enabled: bool,
}

/// Reply of get-installation-path.
#[derive(Debug, Serialize)]
pub struct InstallationPath {
    /// Absolute path of the user data directory.
    pub path: PathBuf,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/shortcuts", get(get_shortcuts).put(save_shortcuts))
        .route("/api/shortcuts/export", post(export_shortcuts))
        .route("/api/shortcuts/import", post(import_shortcuts))
        .route("/api/shortcuts/reset", post(reset_shortcuts))
        .route("/api/settings", get(get_settings).put(save_settings))
        .route("/api/updates/check", post(check_updates))
        .route("/api/autostart", post(toggle_autostart))
        .route("/api/installation-path", get(installation_path))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_shortcuts(State(state): State<AppState>) -> Json<Vec<ShortcutRecord>> {
    let service = state.service.lock().await;
    Json(service.get_shortcuts())
}

async fn save_shortcuts(
    State(state): State<AppState>,
    Json(list): Json<Vec<ShortcutRecord>>,
) -> Json<bool> {
    let service = state.service.lock().await;
    Json(service.save_shortcuts(&list))
}

async fn get_settings(State(state): State<AppState>) -> Json<SettingsRecord> {
    let service = state.service.lock().await;
    Json(service.get_settings())
}

async fn save_settings(
    State(state): State<AppState>,
    Json(settings): Json<SettingsRecord>,
) -> Json<bool> {
    let service = state.service.lock().await;
    Json(service.save_settings(&settings))
}

async fn export_shortcuts(
    State(state): State<AppState>,
    Json(prompt): Json<FilePrompt>,
) -> Json<OperationResult> {
    let service = state.service.lock().await;
    let destination = prompt.resolve(&service.paths().default_export_path());
    Json(service.export_shortcuts(destination.as_deref()))
}

async fn import_shortcuts(
    State(state): State<AppState>,
    Json(prompt): Json<FilePrompt>,
) -> Json<OperationResult> {
    let service = state.service.lock().await;
    let source = prompt.resolve(&service.paths().default_export_path());
    Json(service.import_shortcuts(source.as_deref()))
}

async fn reset_shortcuts(State(state): State<AppState>) -> Json<OperationResult> {
    let service = state.service.lock().await;
    Json(service.reset_shortcuts())
}

async fn check_updates(State(state): State<AppState>) -> Json<UpdateStatus> {
    let service = state.service.lock().await;
    Json(service.check_updates())
}

async fn toggle_autostart(
    State(state): State<AppState>,
    Json(request): Json<AutostartRequest>,
) -> Json<OperationResult> {
    let service = state.service.lock().await;
    Json(service.toggle_autostart(request.enabled))
}

async fn installation_path(State(state): State<AppState>) -> Json<InstallationPath> {
    let service = state.service.lock().await;
    Json(InstallationPath {
        path: service.installation_path(),
    })
}
