//! Plugin Module - torch plugin lifecycle
//!
//! The host calls load once, then any sequence of enable, disable and reload.

// Data modules
pub mod plugin_data;

// Operations modules
pub mod plugin_operations;

pub use plugin_data::{
    ApplyReport, PluginOptions, PluginState, TorchPlugin, DEFAULT_CONFIG_PATH, DEFAULT_NAMESPACE,
};

pub use plugin_operations::{
    apply_modifications, disable_plugin, enable_plugin, load_plugin, reload_plugin,
    restore_defaults,
};
