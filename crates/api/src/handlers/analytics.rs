use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use livecast_core::overlay::{RECENT_OVERLAY_LIMIT, TRACKED_TYPES};
use livecast_db::models::overlay::{OverlayAnalytics, OverlayTypeCounts};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/analytics/overlays
///
/// Total overlay count, a per-type breakdown for the tracked types, and the
/// most recently created overlays (newest first). Overlays of untracked
/// types count toward the total but do not appear in `by_type`.
pub async fn overlay_analytics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let total_overlays = state.overlays.count(None).await?;

    let mut by_type = OverlayTypeCounts::new();
    for kind in TRACKED_TYPES {
        by_type.insert(kind.to_string(), state.overlays.count(Some(kind)).await?);
    }

    let recent_overlays = state.overlays.recent(RECENT_OVERLAY_LIMIT).await?;

    Ok(Json(DataResponse::new(OverlayAnalytics {
        total_overlays,
        by_type,
        recent_overlays,
    })))
}
