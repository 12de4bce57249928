use log::Level;
use serde::Deserialize;

use crate::error::MountError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "lightbox-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// CSS selector for the gallery elements on the page.
    pub item_selector: String,
    /// Horizontal distance in CSS pixels a swipe must exceed.
    pub swipe_threshold: f64,
    /// How long the image stays faded out before its source is swapped.
    pub fade_delay_ms: u32,
    /// Alt text for videos that don't carry their own.
    pub default_video_alt: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            item_selector: ".gallery-item".to_string(),
            swipe_threshold: 50.0,
            fade_delay_ms: 150,
            default_video_alt: "Видео".to_string(),
        }
    }
}

impl LightboxConfig {
    pub fn from_json(raw: &str) -> Result<Self, MountError> {
        let config: LightboxConfig = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    // Values that would break the viewer fall back to the defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            self.swipe_threshold = defaults.swipe_threshold;
        }
        if self.item_selector.trim().is_empty() {
            self.item_selector = defaults.item_selector;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = LightboxConfig::default();
        assert_eq!(config.item_selector, ".gallery-item");
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.fade_delay_ms, 150);
        assert_eq!(config.default_video_alt, "Видео");
    }

    #[test]
    fn partial_json_overrides_single_fields() {
        let config = LightboxConfig::from_json(r#"{"fade_delay_ms": 300}"#).unwrap();
        assert_eq!(config.fade_delay_ms, 300);
        assert_eq!(config.item_selector, ".gallery-item");
        assert_eq!(config.swipe_threshold, 50.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(LightboxConfig::from_json("{}").unwrap(), LightboxConfig::default());
    }

    #[test]
    fn bad_values_fall_back() {
        let config =
            LightboxConfig::from_json(r#"{"swipe_threshold": -10, "item_selector": " "}"#).unwrap();
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.item_selector, ".gallery-item");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LightboxConfig::from_json("{ fade_delay_ms: ").unwrap_err();
        assert!(matches!(err, MountError::Config(_)));
    }
}
