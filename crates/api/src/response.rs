//! Response envelope types for API handlers.
//!
//! Every endpoint except `/api/health` answers with the envelope
//! `{ success, data?, error?, message?, count? }`. Use these structs rather
//! than ad-hoc `json!` bodies so the shape stays consistent.

use serde::Serialize;

/// `{ "success": true, "data": T, "message"?, "count"? }`
///
/// ```ignore
/// Ok(Json(DataResponse::new(items).with_count(n)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            count: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// `{ "success": true, "message": ... }` for operations with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Result of `DELETE /overlays/batch`.
#[derive(Debug, Serialize)]
pub struct BatchDeleteResponse {
    pub success: bool,
    pub deleted_count: u64,
    pub message: String,
}

/// Result of `POST /stream/validate`.
#[derive(Debug, Serialize)]
pub struct StreamValidationResponse {
    pub success: bool,
    pub valid: bool,
    pub message: String,
}

/// `{ "success": false, "error": ..., "message"? }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
