//! Plugin Data - lifecycle state of the torch plugin
//!
//! Plain data; the lifecycle transitions live in `plugin_operations`.

use crate::config::TorchSettings;
use crate::controller::LightController;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "plugins/BrighterTorches/config.json";
pub const DEFAULT_NAMESPACE: &str = "hytale";

/// Where the plugin reads its settings and which block namespace it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    pub config_path: PathBuf,
    pub namespace: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Host-driven lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    Unloaded,
    Loaded,
    Enabled,
    Disabled,
}

/// Outcome of one pass over the torch block ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: usize,
    pub failed: usize,
}

impl ApplyReport {
    pub fn attempted(&self) -> usize {
        self.applied + self.failed
    }
}

/// The plugin instance, owning its light controller
#[derive(Debug)]
pub struct TorchPlugin<C: LightController> {
    pub(crate) options: PluginOptions,
    pub(crate) state: PluginState,
    /// `None` until the first enable or reload reads the config.
    pub(crate) settings: Option<TorchSettings>,
    pub(crate) controller: C,
}

impl<C: LightController> TorchPlugin<C> {
    pub fn new(options: PluginOptions, controller: C) -> Self {
        Self {
            options,
            state: PluginState::Unloaded,
            settings: None,
            controller,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    pub fn settings(&self) -> Option<&TorchSettings> {
        self.settings.as_ref()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }
}
