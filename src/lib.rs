// Brighter Torches - torch light plugin for voxel game hosts
//
// The plugin reads a JSON config, then pushes torch light levels through a
// `LightController` the host provides.
// - config: settings record, JSON parsing, file loading
// - plugin: lifecycle data and operations (load/enable/disable/reload)
// - host: the shared instance a game runtime drives

// Core modules
pub mod error;
pub mod logging;

// Plugin systems
pub mod config;
pub mod controller;
pub mod host;
pub mod light;
pub mod plugin;

pub use config::{load_settings, parse_settings, ConfigError, ConfigResult, TorchSettings};
pub use controller::{ControllerError, ControllerResult, LightController, LoggingLightController};
pub use error::{PluginError, PluginResult};
pub use host::{PluginHost, SharedPlugin};
pub use light::{LightLevel, TorchKind};
pub use logging::init_logging;
pub use plugin::{ApplyReport, PluginOptions, PluginState, TorchPlugin};
