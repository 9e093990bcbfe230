//! Settings loading from configuration files.
//!
//! Provides functions to load [`Settings`] from TOML strings and files.
//! Values present in the file override the defaults; everything else keeps
//! its default.
//!
//! # Examples
//!
//! ```rust,no_run
//! use placekit_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/placekit.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::PlacekitError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// The TOML is merged over the default settings so that partial
/// configuration files work: any field not present keeps its default.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or a field has the wrong type.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, PlacekitError> {
    // Merge through serde_json::Value so partial TOML files keep defaults
    // for everything they do not mention.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| PlacekitError::ConfigurationError(format!("failed to parse TOML: {e}")))?;

    let json_value = toml_to_json(toml_value);
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        PlacekitError::ConfigurationError(format!("failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, json_value);
    serde_json::from_value(merged).map_err(|e| {
        PlacekitError::ConfigurationError(format!("failed to deserialize settings: {e}"))
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, PlacekitError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        PlacekitError::ConfigurationError(format!(
            "failed to read settings file {}: {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Converts a `toml::Value` into a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Recursively merges `overlay` into `base`. Objects merge key-by-key;
/// any other value in the overlay replaces the base value.
fn merge_json(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
    match (base, overlay) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge_json(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings.response_type, "responses");
        assert_eq!(settings.csrf.cookie_name, "csrftoken");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = from_toml_str(r#"api_root = "https://api.example.com""#).unwrap();
        assert_eq!(settings.api_root, "https://api.example.com");
        assert_eq!(settings.support_type, "support");
    }

    #[test]
    fn test_nested_table_merge() {
        let toml = r#"
            log_level = "debug"

            [csrf]
            header_name = "X-Token"
        "#;
        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.csrf.header_name, "X-Token");
        // cookie_name not mentioned, keeps its default
        assert_eq!(settings.csrf.cookie_name, "csrftoken");
    }

    #[test]
    fn test_activity_limit_override() {
        let settings = from_toml_str("activity_limit = 50").unwrap();
        assert_eq!(settings.activity_limit, Some(50));
    }

    #[test]
    fn test_malformed_toml_errors() {
        let result = from_toml_str("api_root = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_errors() {
        let result = from_toml_str("debug = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        let result = from_toml_file("/definitely/not/here.toml");
        assert!(result.is_err());
    }
}
