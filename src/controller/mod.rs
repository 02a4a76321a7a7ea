//! Light Controller - the seam between the plugin and the game's block API
//!
//! The plugin never touches game state directly. Every light change goes
//! through a `LightController` supplied by the host integration, so the real
//! block registry can be plugged in once the game exposes one.

pub mod logging_controller;

pub use logging_controller::LoggingLightController;

use crate::light::LightLevel;

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),
    #[error("Light change rejected for {block_id}: {reason}")]
    Rejected { block_id: String, reason: String },
    #[error("Light API unavailable: {0}")]
    Unavailable(String),
}

/// Capability to change block light emission in the running game
pub trait LightController {
    /// Set the light emitted by every block with this identifier.
    fn set_block_light(&mut self, block_id: &str, level: LightLevel) -> ControllerResult<()>;

    /// Put all modified blocks back to their original light emission.
    fn restore_defaults(&mut self) -> ControllerResult<()>;
}

impl<C: LightController + ?Sized> LightController for Box<C> {
    fn set_block_light(&mut self, block_id: &str, level: LightLevel) -> ControllerResult<()> {
        (**self).set_block_light(block_id, level)
    }

    fn restore_defaults(&mut self) -> ControllerResult<()> {
        (**self).restore_defaults()
    }
}
