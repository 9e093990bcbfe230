//! Settings for placekit.
//!
//! This module provides the [`Settings`] struct holding all configuration the
//! client and admin crates consume, with sensible defaults. Settings can be
//! loaded from TOML via [`crate::settings_loader`].

use serde::{Deserialize, Serialize};

/// CSRF-related configuration for the request interceptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfSettings {
    /// The name of the cookie holding the CSRF token.
    pub cookie_name: String,
    /// The name of the request header the token is attached as.
    pub header_name: String,
}

impl Default for CsrfSettings {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            header_name: "X-CSRFToken".to_string(),
        }
    }
}

/// The complete set of placekit settings.
///
/// # Examples
///
/// ```
/// use placekit_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.response_type, "responses");
/// assert_eq!(settings.csrf.cookie_name, "csrftoken");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── API ──────────────────────────────────────────────────────────

    /// The root the API paths are joined against. Empty means same-origin
    /// relative paths.
    pub api_root: String,
    /// The submission type tag for survey responses.
    pub response_type: String,
    /// The submission type tag for support submissions.
    pub support_type: String,
    /// How many activity records to request when bootstrapping, if limited.
    pub activity_limit: Option<u32>,

    // ── Security ─────────────────────────────────────────────────────

    /// CSRF interceptor configuration.
    pub csrf: CsrfSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            api_root: String::new(),
            response_type: "responses".to_string(),
            support_type: "support".to_string(),
            activity_limit: Some(20),
            csrf: CsrfSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.api_root, "");
        assert_eq!(settings.response_type, "responses");
        assert_eq!(settings.support_type, "support");
        assert_eq!(settings.activity_limit, Some(20));
    }

    #[test]
    fn test_default_csrf_settings() {
        let csrf = CsrfSettings::default();
        assert_eq!(csrf.cookie_name, "csrftoken");
        assert_eq!(csrf.header_name, "X-CSRFToken");
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.response_type, settings.response_type);
        assert_eq!(back.csrf.header_name, settings.csrf.header_name);
    }
}
