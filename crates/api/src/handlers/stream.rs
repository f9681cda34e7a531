use axum::response::IntoResponse;
use axum::Json;
use livecast_core::stream::validate_stream_url;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::StreamValidationResponse;

/// Body of `POST /stream/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateStream {
    #[serde(default)]
    pub rtsp_url: Option<String>,
}

/// POST /api/stream/validate
///
/// Format check only: the URL must start with `rtsp://` or `rtmp://`.
/// No connection to the stream is attempted.
pub async fn validate_stream(
    ApiJson(input): ApiJson<ValidateStream>,
) -> AppResult<impl IntoResponse> {
    validate_stream_url(input.rtsp_url.as_deref())?;

    Ok(Json(StreamValidationResponse {
        success: true,
        valid: true,
        message: "RTSP URL format is valid".into(),
    }))
}
