//! Overlay defaults and validation rules.

use crate::error::CoreError;

pub const DEFAULT_FONT_SIZE: i64 = 16;
pub const DEFAULT_COLOR: &str = "#ffffff";
pub const DEFAULT_BACKGROUND_COLOR: &str = "rgba(0,0,0,0.5)";
pub const DEFAULT_BORDER_RADIUS: i64 = 4;

// Batch create has no required fields; these fill the gaps.
pub const BATCH_DEFAULT_TYPE: &str = "text";
pub const BATCH_DEFAULT_CONTENT: &str = "";
pub const BATCH_DEFAULT_X: i64 = 0;
pub const BATCH_DEFAULT_Y: i64 = 0;
pub const BATCH_DEFAULT_WIDTH: i64 = 200;
pub const BATCH_DEFAULT_HEIGHT: i64 = 50;

/// Overlay types broken out individually by the analytics endpoint.
///
/// Overlays of any other type count toward the total only.
pub const TRACKED_TYPES: [&str; 2] = ["text", "logo"];

/// Number of overlays listed under `recent_overlays` in analytics.
pub const RECENT_OVERLAY_LIMIT: i64 = 5;

pub const NO_CHANGES_MESSAGE: &str = "No changes made";

/// Unwrap a required field, naming it in the error when it is absent.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field: {field}")))
}

/// Return `Some(new)` only when it differs from the stored value.
///
/// Used to build the set of fields an update actually changes.
pub fn changed<T: PartialEq>(new: Option<T>, current: &T) -> Option<T> {
    new.filter(|v| v != current)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_passes_present_values_through() {
        assert_eq!(require(Some(3), "x").unwrap(), 3);
    }

    #[test]
    fn require_names_the_missing_field() {
        let err = require::<i64>(None, "width").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Missing required field: width");
    }

    #[test]
    fn changed_drops_equal_values() {
        assert_eq!(changed(Some(10), &10), None);
        assert_eq!(changed(Some(11), &10), Some(11));
        assert_eq!(changed::<i64>(None, &10), None);
    }

    #[test]
    fn tracked_types_are_text_and_logo() {
        assert_eq!(TRACKED_TYPES, ["text", "logo"]);
    }
}
