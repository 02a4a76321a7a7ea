//! Config Module - loading and validating torch settings

// Data modules
pub mod config_data;

// Operations modules
pub mod config_operations;

pub use config_data::{AdvancedSection, BrightnessSection, SettingsDocument, TorchSettings};
pub use config_operations::{
    clamp_light_level, load_settings, parse_settings, parse_settings_value, settings_to_json,
    try_load_settings, try_parse_settings, try_parse_settings_value, write_default_config,
};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {field} ({reason})")]
    InvalidField { field: String, reason: String },
}
