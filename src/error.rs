//! Error handling for the Brighter Torches plugin
//!
//! Lifecycle callbacks never return these to the host; they are logged where
//! they occur. The strict APIs return them so callers can decide.

use crate::config::ConfigError;
use crate::controller::ControllerError;
use crate::plugin::PluginState;

/// Main error type for the plugin
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Light controller error: {0}")]
    Controller(#[from] ControllerError),

    #[error("Cannot {operation} while plugin is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: PluginState,
    },
}

/// Type alias for plugin results
pub type PluginResult<T> = Result<T, PluginError>;
