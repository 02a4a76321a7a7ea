//! Config Operations - parse, load and write torch settings
//!
//! The lenient entry points (`parse_settings`, `parse_settings_value`,
//! `load_settings`) never fail: any problem is logged and the full default
//! settings are returned. The `try_*` variants expose the underlying error.

use super::config_data::{SettingsDocument, TorchSettings};
use super::{ConfigError, ConfigResult};
use crate::light::LightLevel;
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Clamp a configured value into the valid light level range.
pub fn clamp_light_level(value: i64) -> LightLevel {
    LightLevel::clamped(value)
}

/// Strictly parse an already decoded JSON document.
///
/// `null` is treated as an empty document. Any other non-object root is
/// rejected.
pub fn try_parse_settings_value(value: &Value) -> ConfigResult<TorchSettings> {
    match value {
        Value::Null => Ok(TorchSettings::default()),
        Value::Object(_) => {
            let document = SettingsDocument::deserialize(value)?;
            Ok(apply_document(&document))
        }
        other => Err(ConfigError::InvalidField {
            field: "<root>".to_string(),
            reason: format!("expected an object, found {}", json_type_name(other)),
        }),
    }
}

/// Strictly parse config text. Blank text yields the defaults.
pub fn try_parse_settings(text: &str) -> ConfigResult<TorchSettings> {
    if text.trim().is_empty() {
        return Ok(TorchSettings::default());
    }

    let value: Value = serde_json::from_str(text)?;
    try_parse_settings_value(&value)
}

/// Parse a decoded JSON document, falling back to defaults on any error.
pub fn parse_settings_value(value: &Value) -> TorchSettings {
    try_parse_settings_value(value).unwrap_or_else(|e| {
        log::error!("[BrighterTorches] Error parsing config: {}", e);
        TorchSettings::default()
    })
}

/// Parse config text, falling back to defaults on any error.
pub fn parse_settings(text: &str) -> TorchSettings {
    try_parse_settings(text).unwrap_or_else(|e| {
        log::error!("[BrighterTorches] Error parsing config: {}", e);
        TorchSettings::default()
    })
}

/// Read settings from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn try_load_settings(path: &Path) -> ConfigResult<Option<TorchSettings>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    try_parse_settings(&text).map(Some)
}

/// Read settings from `path`, using defaults when the file is absent or bad.
pub fn load_settings(path: &Path) -> TorchSettings {
    match try_load_settings(path) {
        Ok(Some(settings)) => {
            log::info!("[BrighterTorches] Configuration loaded successfully");
            log::debug!("[BrighterTorches] {}", settings);
            settings
        }
        Ok(None) => {
            log::info!("[BrighterTorches] Using default configuration");
            TorchSettings::default()
        }
        Err(e) => {
            log::error!(
                "[BrighterTorches] Failed to load configuration from {}: {}",
                path.display(),
                e
            );
            TorchSettings::default()
        }
    }
}

/// Serialize settings in the config file layout.
pub fn settings_to_json(settings: &TorchSettings) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(&SettingsDocument::from(settings))?)
}

/// Write the default config file, creating parent directories.
pub fn write_default_config(path: &Path) -> ConfigResult<()> {
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = settings_to_json(&TorchSettings::default())?;
    std::fs::write(path, json).map_err(io_error)?;

    log::info!("[BrighterTorches] Wrote default configuration to {}", path.display());
    Ok(())
}

/// Overlay a document on the defaults. Setters clamp every light level.
fn apply_document(document: &SettingsDocument) -> TorchSettings {
    let mut settings = TorchSettings::default();

    if let Some(brightness) = &document.brightness {
        if let Some(level) = brightness.torch_light_level {
            settings.set_torch_light_level(level);
        }
        if let Some(level) = brightness.wall_torch_light_level {
            settings.set_wall_torch_light_level(level);
        }
        if let Some(level) = brightness.soul_torch_light_level {
            settings.set_soul_torch_light_level(level);
        }
        if let Some(level) = brightness.redstone_torch_light_level {
            settings.set_redstone_torch_light_level(level);
        }
        if let Some(enabled) = brightness.enabled {
            settings.set_enabled(enabled);
        }
    }

    if let Some(advanced) = &document.advanced {
        if let Some(modify) = advanced.modify_vanilla_torches {
            settings.set_modify_vanilla_torches(modify);
        }
        if let Some(apply) = advanced.apply_to_all_torch_types {
            settings.set_apply_to_all_torch_types(apply);
        }
        if let Some(radius) = advanced.light_radius {
            settings.set_light_radius(radius);
        }
    }

    settings
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
