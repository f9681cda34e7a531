//! Handlers for overlay CRUD and batch operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use livecast_core::error::CoreError;
use livecast_core::overlay::NO_CHANGES_MESSAGE;
use livecast_db::models::overlay::{BatchCreateOverlays, BatchDeleteOverlays, OverlayInput};
use livecast_db::{parse_object_id, ObjectId};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::{BatchDeleteResponse, DataResponse, MessageResponse};
use crate::state::AppState;

/// Resolve a path id, treating malformed ids the same as unknown ones.
fn parse_overlay_id(raw: &str) -> Result<ObjectId, CoreError> {
    parse_object_id(raw).ok_or_else(|| CoreError::overlay_not_found(raw))
}

// ---------------------------------------------------------------------------
// Single-item endpoints
// ---------------------------------------------------------------------------

/// GET /api/overlays
///
/// List every overlay in store order.
pub async fn list_overlays(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let overlays = state.overlays.list().await?;
    let count = overlays.len();

    Ok(Json(DataResponse::new(overlays).with_count(count)))
}

/// GET /api/overlays/{id}
pub async fn get_overlay(
    State(state): State<AppState>,
    Path(overlay_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_overlay_id(&overlay_id)?;
    let overlay = state
        .overlays
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::overlay_not_found(&overlay_id))?;

    Ok(Json(DataResponse::new(overlay)))
}

/// POST /api/overlays
///
/// Create an overlay. `type`, `content`, `x`, `y`, `width` and `height`
/// are required; styling fields fall back to their defaults.
pub async fn create_overlay(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OverlayInput>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new_overlay()?;
    let overlay = state.overlays.create(new).await?;

    tracing::info!(
        overlay_id = %overlay.id,
        kind = %overlay.kind,
        "Overlay created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(overlay).with_message("Overlay created successfully")),
    ))
}

/// PUT /api/overlays/{id}
///
/// Partially update an overlay. A body that would not change any stored
/// field is rejected with 400 rather than treated as a no-op.
pub async fn update_overlay(
    State(state): State<AppState>,
    Path(overlay_id): Path<String>,
    ApiJson(input): ApiJson<OverlayInput>,
) -> AppResult<impl IntoResponse> {
    let id = parse_overlay_id(&overlay_id)?;
    let existing = state
        .overlays
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::overlay_not_found(&overlay_id))?;

    let changes = input.changes_against(&existing);
    if changes.is_empty() {
        return Err(CoreError::Validation(NO_CHANGES_MESSAGE.into()).into());
    }

    // Reading then writing is not atomic; a concurrent delete surfaces as 404.
    let overlay = state
        .overlays
        .update(id, &changes)
        .await?
        .ok_or_else(|| CoreError::overlay_not_found(&overlay_id))?;

    tracing::info!(overlay_id = %overlay.id, "Overlay updated");

    Ok(Json(
        DataResponse::new(overlay).with_message("Overlay updated successfully"),
    ))
}

/// DELETE /api/overlays/{id}
pub async fn delete_overlay(
    State(state): State<AppState>,
    Path(overlay_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_overlay_id(&overlay_id)?;
    if !state.overlays.delete(id).await? {
        return Err(CoreError::overlay_not_found(overlay_id).into());
    }

    tracing::info!(overlay_id = %overlay_id, "Overlay deleted");

    Ok(Json(MessageResponse::new("Overlay deleted successfully")))
}

// ---------------------------------------------------------------------------
// Batch endpoints
// ---------------------------------------------------------------------------

/// POST /api/overlays/batch
///
/// Create several overlays in one store call. Elements have no required
/// fields; only an empty list is rejected.
pub async fn batch_create_overlays(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BatchCreateOverlays>,
) -> AppResult<impl IntoResponse> {
    if input.overlays.is_empty() {
        return Err(CoreError::Validation("No overlays provided".into()).into());
    }

    let new = input
        .overlays
        .into_iter()
        .map(OverlayInput::into_batch_overlay)
        .collect();
    let created = state.overlays.create_many(new).await?;
    let count = created.len();

    tracing::info!(count, "Overlays batch created");

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(created)
                .with_count(count)
                .with_message(format!("Created {count} overlays successfully")),
        ),
    ))
}

/// DELETE /api/overlays/batch
///
/// Delete every listed overlay in one store call. Ids that match nothing
/// are skipped; a malformed id rejects the whole request.
pub async fn batch_delete_overlays(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BatchDeleteOverlays>,
) -> AppResult<impl IntoResponse> {
    if input.overlay_ids.is_empty() {
        return Err(CoreError::Validation("No overlay IDs provided".into()).into());
    }

    let ids = input
        .overlay_ids
        .iter()
        .map(|raw| {
            parse_object_id(raw)
                .ok_or_else(|| CoreError::Validation(format!("Invalid overlay id: {raw}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let deleted_count = state.overlays.delete_many(&ids).await?;

    tracing::info!(
        requested = ids.len(),
        deleted_count,
        "Overlays batch deleted",
    );

    Ok(Json(BatchDeleteResponse {
        success: true,
        deleted_count,
        message: format!("Deleted {deleted_count} overlays successfully"),
    }))
}
