//! Overlay models and DTOs.
//!
//! [`Overlay`] is the shape returned to clients. [`OverlayInput`] is the
//! request body shared by create, update and each batch-create element;
//! the operation decides how absent fields are treated.

use std::collections::BTreeMap;

use livecast_core::coerce::LooseInt;
use livecast_core::error::CoreError;
use livecast_core::overlay::{
    changed, require, BATCH_DEFAULT_CONTENT, BATCH_DEFAULT_HEIGHT, BATCH_DEFAULT_TYPE,
    BATCH_DEFAULT_WIDTH, BATCH_DEFAULT_X, BATCH_DEFAULT_Y, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_BORDER_RADIUS, DEFAULT_COLOR, DEFAULT_FONT_SIZE,
};
use livecast_core::types::Timestamp;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Hex-encoded document id.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    #[serde(rename = "fontSize")]
    pub font_size: i64,
    pub color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "borderRadius")]
    pub border_radius: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully resolved overlay ready for insertion.
///
/// Ids and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOverlay {
    pub kind: String,
    pub content: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub font_size: i64,
    pub color: String,
    pub background_color: String,
    pub border_radius: i64,
}

/// The fields an update actually changes. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayChanges {
    pub kind: Option<String>,
    pub content: Option<String>,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub font_size: Option<i64>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub border_radius: Option<i64>,
}

impl OverlayChanges {
    pub fn is_empty(&self) -> bool {
        *self == OverlayChanges::default()
    }

    /// Write the changed fields onto `overlay` and stamp `updated_at`.
    pub fn apply_to(&self, overlay: &mut Overlay, updated_at: Timestamp) {
        if let Some(v) = &self.kind {
            overlay.kind = v.clone();
        }
        if let Some(v) = &self.content {
            overlay.content = v.clone();
        }
        if let Some(v) = self.x {
            overlay.x = v;
        }
        if let Some(v) = self.y {
            overlay.y = v;
        }
        if let Some(v) = self.width {
            overlay.width = v;
        }
        if let Some(v) = self.height {
            overlay.height = v;
        }
        if let Some(v) = self.font_size {
            overlay.font_size = v;
        }
        if let Some(v) = &self.color {
            overlay.color = v.clone();
        }
        if let Some(v) = &self.background_color {
            overlay.background_color = v.clone();
        }
        if let Some(v) = self.border_radius {
            overlay.border_radius = v;
        }
        overlay.updated_at = updated_at;
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Overlay fields as sent by clients. Every field is optional at the
/// deserialization level; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverlayInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub x: Option<LooseInt>,
    pub y: Option<LooseInt>,
    pub width: Option<LooseInt>,
    pub height: Option<LooseInt>,
    #[serde(rename = "fontSize")]
    pub font_size: Option<LooseInt>,
    pub color: Option<String>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,
    #[serde(rename = "borderRadius")]
    pub border_radius: Option<LooseInt>,
}

impl OverlayInput {
    /// Resolve a single-create body.
    ///
    /// `type`, `content`, `x`, `y`, `width` and `height` are required and
    /// checked in that order; the first missing one is reported.
    pub fn into_new_overlay(self) -> Result<NewOverlay, CoreError> {
        let kind = require(self.kind, "type")?;
        let content = require(self.content, "content")?;
        let x = require(self.x, "x")?.get();
        let y = require(self.y, "y")?.get();
        let width = require(self.width, "width")?.get();
        let height = require(self.height, "height")?.get();

        Ok(NewOverlay {
            kind,
            content,
            x,
            y,
            width,
            height,
            font_size: self.font_size.map_or(DEFAULT_FONT_SIZE, LooseInt::get),
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            background_color: self
                .background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            border_radius: self.border_radius.map_or(DEFAULT_BORDER_RADIUS, LooseInt::get),
        })
    }

    /// Resolve one element of a batch-create body. Never fails: every
    /// absent field takes its batch default.
    pub fn into_batch_overlay(self) -> NewOverlay {
        NewOverlay {
            kind: self.kind.unwrap_or_else(|| BATCH_DEFAULT_TYPE.to_string()),
            content: self
                .content
                .unwrap_or_else(|| BATCH_DEFAULT_CONTENT.to_string()),
            x: self.x.map_or(BATCH_DEFAULT_X, LooseInt::get),
            y: self.y.map_or(BATCH_DEFAULT_Y, LooseInt::get),
            width: self.width.map_or(BATCH_DEFAULT_WIDTH, LooseInt::get),
            height: self.height.map_or(BATCH_DEFAULT_HEIGHT, LooseInt::get),
            font_size: self.font_size.map_or(DEFAULT_FONT_SIZE, LooseInt::get),
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            background_color: self
                .background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            border_radius: self.border_radius.map_or(DEFAULT_BORDER_RADIUS, LooseInt::get),
        }
    }

    /// Compute which of the supplied fields differ from `current`.
    ///
    /// An empty result means the update would be a no-op.
    pub fn changes_against(self, current: &Overlay) -> OverlayChanges {
        OverlayChanges {
            kind: changed(self.kind, &current.kind),
            content: changed(self.content, &current.content),
            x: changed(self.x.map(LooseInt::get), &current.x),
            y: changed(self.y.map(LooseInt::get), &current.y),
            width: changed(self.width.map(LooseInt::get), &current.width),
            height: changed(self.height.map(LooseInt::get), &current.height),
            font_size: changed(self.font_size.map(LooseInt::get), &current.font_size),
            color: changed(self.color, &current.color),
            background_color: changed(self.background_color, &current.background_color),
            border_radius: changed(self.border_radius.map(LooseInt::get), &current.border_radius),
        }
    }
}

/// Body of `POST /overlays/batch`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchCreateOverlays {
    #[serde(default)]
    pub overlays: Vec<OverlayInput>,
}

/// Body of `DELETE /overlays/batch`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchDeleteOverlays {
    #[serde(default)]
    pub overlay_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Overlay counts keyed by `type`, for the tracked types only.
pub type OverlayTypeCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone, Serialize)]
pub struct OverlayAnalytics {
    pub total_overlays: u64,
    pub by_type: OverlayTypeCounts,
    pub recent_overlays: Vec<Overlay>,
}
