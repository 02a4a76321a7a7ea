//! Host Integration - the single plugin instance the game runtime talks to
//!
//! The host constructs one `PluginHost` and forwards its lifecycle callbacks
//! here. Other collaborators get the same instance through `instance()`.
//! Callbacks are serialized through a mutex, so a host that fires them from
//! different threads still sees them one at a time.

use crate::config::{write_default_config, TorchSettings};
use crate::controller::{LightController, LoggingLightController};
use crate::error::PluginResult;
use crate::plugin::{
    disable_plugin, enable_plugin, load_plugin, reload_plugin, ApplyReport, PluginOptions,
    PluginState, TorchPlugin,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to the active plugin instance
pub type SharedPlugin<C> = Arc<Mutex<TorchPlugin<C>>>;

pub struct PluginHost<C: LightController> {
    plugin: SharedPlugin<C>,
}

impl<C: LightController> PluginHost<C> {
    pub fn new(options: PluginOptions, controller: C) -> Self {
        Self {
            plugin: Arc::new(Mutex::new(TorchPlugin::new(options, controller))),
        }
    }

    /// Handle to the plugin instance owned by this host
    pub fn instance(&self) -> SharedPlugin<C> {
        Arc::clone(&self.plugin)
    }

    pub fn on_load(&self) {
        load_plugin(&mut *self.plugin.lock());
    }

    pub fn on_enable(&self) -> Option<ApplyReport> {
        enable_plugin(&mut *self.plugin.lock())
    }

    pub fn on_disable(&self) {
        disable_plugin(&mut *self.plugin.lock());
    }

    pub fn on_reload(&self) -> Option<ApplyReport> {
        reload_plugin(&mut *self.plugin.lock())
    }

    pub fn state(&self) -> PluginState {
        self.plugin.lock().state()
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Option<TorchSettings> {
        self.plugin.lock().settings().copied()
    }

    /// Write the default config file if none exists yet.
    ///
    /// Returns whether a file was written.
    pub fn ensure_config_file(&self) -> PluginResult<bool> {
        let path = self.plugin.lock().options().config_path.clone();
        if path.exists() {
            return Ok(false);
        }

        write_default_config(&path)?;
        Ok(true)
    }
}

impl Default for PluginHost<LoggingLightController> {
    fn default() -> Self {
        Self::new(PluginOptions::default(), LoggingLightController::new())
    }
}
