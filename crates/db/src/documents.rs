//! BSON storage representations.
//!
//! These mirror the API models but keep the native `ObjectId` and BSON
//! datetime types the store expects. Conversions into the API models
//! hex-encode the id.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{doc, Document};
use livecast_core::settings::{
    default_autoplay, default_overlay_enabled, default_rtsp_url, default_volume,
};
use livecast_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::overlay::{NewOverlay, Overlay, OverlayChanges};
use crate::models::settings::Settings;

/// An overlay as stored in the `overlays` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
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
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: Timestamp,
}

impl OverlayDocument {
    /// Build a document for insertion with a fresh id.
    pub fn new(new: NewOverlay, now: Timestamp) -> Self {
        Self {
            id: ObjectId::new(),
            kind: new.kind,
            content: new.content,
            x: new.x,
            y: new.y,
            width: new.width,
            height: new.height,
            font_size: new.font_size,
            color: new.color,
            background_color: new.background_color,
            border_radius: new.border_radius,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<OverlayDocument> for Overlay {
    fn from(doc: OverlayDocument) -> Self {
        Overlay {
            id: doc.id.to_hex(),
            kind: doc.kind,
            content: doc.content,
            x: doc.x,
            y: doc.y,
            width: doc.width,
            height: doc.height,
            font_size: doc.font_size,
            color: doc.color,
            background_color: doc.background_color,
            border_radius: doc.border_radius,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Build the `$set` body for an overlay update, including `updated_at`.
pub fn overlay_set_document(changes: &OverlayChanges, now: Timestamp) -> Document {
    let mut set = doc! { "updated_at": bson::DateTime::from_chrono(now) };

    if let Some(v) = &changes.kind {
        set.insert("type", v.as_str());
    }
    if let Some(v) = &changes.content {
        set.insert("content", v.as_str());
    }
    if let Some(v) = changes.x {
        set.insert("x", v);
    }
    if let Some(v) = changes.y {
        set.insert("y", v);
    }
    if let Some(v) = changes.width {
        set.insert("width", v);
    }
    if let Some(v) = changes.height {
        set.insert("height", v);
    }
    if let Some(v) = changes.font_size {
        set.insert("fontSize", v);
    }
    if let Some(v) = &changes.color {
        set.insert("color", v.as_str());
    }
    if let Some(v) = &changes.background_color {
        set.insert("backgroundColor", v.as_str());
    }
    if let Some(v) = changes.border_radius {
        set.insert("borderRadius", v);
    }

    set
}

/// The settings singleton as stored in the `settings` collection.
///
/// Documents written by older clients may lack fields; those read back
/// with their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_rtsp_url")]
    pub rtsp_url: String,
    #[serde(default = "default_volume")]
    pub volume: i64,
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_overlay_enabled")]
    pub overlay_enabled: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: Timestamp,
}

impl From<SettingsDocument> for Settings {
    fn from(doc: SettingsDocument) -> Self {
        Settings {
            id: doc.id.to_hex(),
            kind: doc.kind,
            rtsp_url: doc.rtsp_url,
            volume: doc.volume,
            autoplay: doc.autoplay,
            overlay_enabled: doc.overlay_enabled,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use livecast_core::types::now;

    use super::*;

    fn sample_new() -> NewOverlay {
        NewOverlay {
            kind: "text".into(),
            content: "Live".into(),
            x: 5,
            y: 6,
            width: 200,
            height: 50,
            font_size: 16,
            color: "#ffffff".into(),
            background_color: "rgba(0,0,0,0.5)".into(),
            border_radius: 4,
        }
    }

    #[test]
    fn overlay_document_uses_wire_field_names() {
        let doc = bson::to_document(&OverlayDocument::new(sample_new(), now())).unwrap();

        for key in [
            "_id",
            "type",
            "fontSize",
            "backgroundColor",
            "borderRadius",
            "created_at",
        ] {
            assert!(doc.contains_key(key), "missing key {key}");
        }
        assert!(matches!(doc.get("created_at"), Some(bson::Bson::DateTime(_))));
        assert!(matches!(doc.get("_id"), Some(bson::Bson::ObjectId(_))));
    }

    #[test]
    fn conversion_hex_encodes_id() {
        let stored = OverlayDocument::new(sample_new(), now());
        let hex = stored.id.to_hex();
        let overlay = Overlay::from(stored);
        assert_eq!(overlay.id, hex);
        assert_eq!(overlay.created_at, overlay.updated_at);
    }

    #[test]
    fn set_document_contains_only_changed_fields() {
        let changes = OverlayChanges {
            font_size: Some(22),
            color: Some("#ff0000".into()),
            ..Default::default()
        };
        let set = overlay_set_document(&changes, now());

        assert_eq!(set.len(), 3);
        assert_eq!(set.get_i64("fontSize").unwrap(), 22);
        assert_eq!(set.get_str("color").unwrap(), "#ff0000");
        assert!(set.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn sparse_settings_document_reads_defaults() {
        let ts = bson::DateTime::from_chrono(now());
        let raw = doc! {
            "_id": ObjectId::new(),
            "type": "app_settings",
            "volume": 70_i32,
            "created_at": ts,
            "updated_at": ts,
        };

        let settings: Settings = bson::from_document::<SettingsDocument>(raw).unwrap().into();

        assert_eq!(settings.volume, 70);
        assert_eq!(settings.rtsp_url, "");
        assert!(!settings.autoplay);
        assert!(settings.overlay_enabled);
    }
}
