//! Handlers for the application settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use livecast_db::models::settings::UpdateSettings;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/settings
///
/// Return the settings singleton. The first call on an empty store creates
/// it with defaults.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.get_or_create().await?;

    Ok(Json(DataResponse::new(settings)))
}

/// PUT /api/settings
///
/// Merge the supplied fields into the singleton, creating it if needed.
/// Unlike overlay updates, an update that changes nothing still succeeds.
pub async fn update_settings(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateSettings>,
) -> AppResult<impl IntoResponse> {
    let settings = state.settings.upsert(&input).await?;

    tracing::info!(
        volume = settings.volume,
        autoplay = settings.autoplay,
        overlay_enabled = settings.overlay_enabled,
        "Settings updated",
    );

    Ok(Json(
        DataResponse::new(settings).with_message("Settings updated successfully"),
    ))
}
