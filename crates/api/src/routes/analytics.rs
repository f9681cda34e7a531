use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes mounted at `/analytics`.
pub fn router() -> Router<AppState> {
    Router::new().route("/overlays", get(analytics::overlay_analytics))
}
