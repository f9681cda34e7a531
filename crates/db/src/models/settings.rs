//! Application settings model and DTO.

use livecast_core::coerce::LooseInt;
use livecast_core::settings::{
    DEFAULT_AUTOPLAY, DEFAULT_OVERLAY_ENABLED, DEFAULT_RTSP_URL, DEFAULT_VOLUME,
    SETTINGS_DISCRIMINATOR,
};
use livecast_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// The application-wide settings singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "_id")]
    pub id: String,
    /// Always [`SETTINGS_DISCRIMINATOR`].
    #[serde(rename = "type")]
    pub kind: String,
    pub rtsp_url: String,
    pub volume: i64,
    pub autoplay: bool,
    pub overlay_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Settings {
    /// A freshly created singleton carrying the defaults.
    pub fn with_defaults(id: String, now: Timestamp) -> Self {
        Self {
            id,
            kind: SETTINGS_DISCRIMINATOR.to_string(),
            rtsp_url: DEFAULT_RTSP_URL.to_string(),
            volume: DEFAULT_VOLUME,
            autoplay: DEFAULT_AUTOPLAY,
            overlay_enabled: DEFAULT_OVERLAY_ENABLED,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields and stamp `updated_at`.
    pub fn apply(&mut self, update: &UpdateSettings, now: Timestamp) {
        if let Some(url) = &update.rtsp_url {
            self.rtsp_url = url.clone();
        }
        if let Some(volume) = update.volume {
            self.volume = volume.get();
        }
        if let Some(autoplay) = update.autoplay {
            self.autoplay = autoplay;
        }
        if let Some(enabled) = update.overlay_enabled {
            self.overlay_enabled = enabled;
        }
        self.updated_at = now;
    }
}

/// Body of `PUT /settings`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettings {
    pub rtsp_url: Option<String>,
    pub volume: Option<LooseInt>,
    pub autoplay: Option<bool>,
    pub overlay_enabled: Option<bool>,
}
