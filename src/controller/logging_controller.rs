//! Placeholder controller used until the game exposes a block light API.
//!
//! It logs each intended change and remembers it, so hosts and tests can see
//! what would have been applied.

use super::{ControllerResult, LightController};
use crate::light::LightLevel;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct LoggingLightController {
    intended_levels: BTreeMap<String, LightLevel>,
    restore_count: usize,
}

impl LoggingLightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light levels set since the last restore, keyed by block id
    pub fn intended_levels(&self) -> &BTreeMap<String, LightLevel> {
        &self.intended_levels
    }

    pub fn restore_count(&self) -> usize {
        self.restore_count
    }
}

impl LightController for LoggingLightController {
    fn set_block_light(&mut self, block_id: &str, level: LightLevel) -> ControllerResult<()> {
        log::info!("[BrighterTorches] Setting {} light level to {}", block_id, level);
        self.intended_levels.insert(block_id.to_string(), level);
        Ok(())
    }

    fn restore_defaults(&mut self) -> ControllerResult<()> {
        log::info!("[BrighterTorches] Restoring default torch properties");
        self.intended_levels.clear();
        self.restore_count += 1;
        Ok(())
    }
}
