//! Light Level - block light emission value
//!
//! Light levels follow the usual voxel lighting model: 0 is dark, 15 is the
//! brightest a block can emit.

use std::fmt;

/// Lowest light level a block can emit
pub const MIN_LIGHT_LEVEL: u8 = 0;

/// Highest light level a block can emit
pub const MAX_LIGHT_LEVEL: u8 = 15;

/// Emitted light of a block, always within `MIN_LIGHT_LEVEL..=MAX_LIGHT_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct LightLevel(u8);

impl LightLevel {
    pub const DARK: LightLevel = LightLevel(MIN_LIGHT_LEVEL);
    pub const FULL: LightLevel = LightLevel(MAX_LIGHT_LEVEL);

    /// Returns `None` when `level` is above `MAX_LIGHT_LEVEL`.
    #[inline]
    pub const fn new(level: u8) -> Option<Self> {
        if level > MAX_LIGHT_LEVEL {
            return None;
        }
        Some(LightLevel(level))
    }

    /// Clamp an arbitrary integer into the valid range.
    #[inline]
    pub fn clamped(value: i64) -> Self {
        let level = value.clamp(MIN_LIGHT_LEVEL as i64, MAX_LIGHT_LEVEL as i64);
        LightLevel(level as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LightLevel> for i64 {
    fn from(level: LightLevel) -> Self {
        level.0 as i64
    }
}
