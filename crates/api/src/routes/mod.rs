pub mod analytics;
pub mod health;
pub mod overlays;
pub mod settings;
pub mod stream;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                       service health
///
/// /overlays                     list, create
/// /overlays/batch               batch create (POST), batch delete (DELETE)
/// /overlays/{id}                get, update, delete
///
/// /settings                     get (lazily created), update
///
/// /stream/validate              URL format check (POST)
///
/// /analytics/overlays           overlay counts and recent overlays
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/overlays", overlays::router())
        .nest("/settings", settings::router())
        .nest("/stream", stream::router())
        .nest("/analytics", analytics::router())
}
