//! Application settings singleton rules.

/// Discriminator value identifying the settings singleton document.
pub const SETTINGS_DISCRIMINATOR: &str = "app_settings";

pub const DEFAULT_RTSP_URL: &str = "";
pub const DEFAULT_VOLUME: i64 = 50;
pub const DEFAULT_AUTOPLAY: bool = false;
pub const DEFAULT_OVERLAY_ENABLED: bool = true;

pub fn default_rtsp_url() -> String {
    DEFAULT_RTSP_URL.to_string()
}

pub fn default_volume() -> i64 {
    DEFAULT_VOLUME
}

pub fn default_autoplay() -> bool {
    DEFAULT_AUTOPLAY
}

pub fn default_overlay_enabled() -> bool {
    DEFAULT_OVERLAY_ENABLED
}
