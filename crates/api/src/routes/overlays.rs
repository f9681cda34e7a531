use axum::routing::{get, post};
use axum::Router;

use crate::handlers::overlays;
use crate::state::AppState;

/// Overlay routes mounted at `/overlays`.
///
/// ```text
/// GET    /        -> list_overlays
/// POST   /        -> create_overlay
/// POST   /batch   -> batch_create_overlays
/// DELETE /batch   -> batch_delete_overlays
/// GET    /{id}    -> get_overlay
/// PUT    /{id}    -> update_overlay
/// DELETE /{id}    -> delete_overlay
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(overlays::list_overlays).post(overlays::create_overlay),
        )
        .route(
            "/batch",
            post(overlays::batch_create_overlays).delete(overlays::batch_delete_overlays),
        )
        .route(
            "/{id}",
            get(overlays::get_overlay)
                .put(overlays::update_overlay)
                .delete(overlays::delete_overlay),
        )
}
