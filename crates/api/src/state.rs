use std::sync::Arc;

use livecast_db::repositories::{MongoOverlayRepo, MongoSettingsRepo, OverlayRepo, SettingsRepo};
use livecast_db::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the repositories and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Overlay collection access.
    pub overlays: Arc<dyn OverlayRepo>,
    /// Settings singleton access.
    pub settings: Arc<dyn SettingsRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        overlays: Arc<dyn OverlayRepo>,
        settings: Arc<dyn SettingsRepo>,
        config: ServerConfig,
    ) -> Self {
        Self {
            overlays,
            settings,
            config: Arc::new(config),
        }
    }

    /// State backed by the MongoDB repositories for `db`.
    pub fn with_mongo(db: &Database, config: ServerConfig) -> Self {
        Self::new(
            Arc::new(MongoOverlayRepo::new(db)),
            Arc::new(MongoSettingsRepo::new(db)),
            config,
        )
    }
}
