//! Stream URL format checks.
//!
//! Only the scheme prefix is inspected. No connection is ever attempted, so
//! a URL that passes here may still point at a dead stream.

use crate::error::CoreError;

/// Schemes accepted by [`validate_stream_url`].
pub const ALLOWED_SCHEMES: [&str; 2] = ["rtsp://", "rtmp://"];

/// Validate the format of an RTSP/RTMP stream URL.
///
/// `None` and the empty string are both treated as a missing URL.
pub fn validate_stream_url(url: Option<&str>) -> Result<(), CoreError> {
    let url = match url {
        Some(u) if !u.is_empty() => u,
        _ => return Err(CoreError::Validation("RTSP URL is required".into())),
    };

    if !ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(CoreError::Validation("Invalid RTSP/RTMP URL format".into()));
    }

    Ok(())
}
