use axum::routing::post;
use axum::Router;

use crate::handlers::stream;
use crate::state::AppState;

/// Stream routes mounted at `/stream`.
///
/// ```text
/// POST /validate  -> validate_stream
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(stream::validate_stream))
}
