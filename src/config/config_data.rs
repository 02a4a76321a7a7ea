//! Config Data - torch brightness settings
//!
//! `TorchSettings` is the validated record the plugin works from.
//! `SettingsDocument` mirrors the JSON file layout; every field is optional so
//! a partial file only overrides what it names.

use crate::light::{LightLevel, TorchKind};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TORCH_LIGHT_LEVEL: i64 = 15;
pub const DEFAULT_WALL_TORCH_LIGHT_LEVEL: i64 = 15;
pub const DEFAULT_SOUL_TORCH_LIGHT_LEVEL: i64 = 12;
pub const DEFAULT_REDSTONE_TORCH_LIGHT_LEVEL: i64 = 10;
pub const DEFAULT_LIGHT_RADIUS: i64 = 20;

/// Validated torch brightness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorchSettings {
    torch_light_level: LightLevel,
    wall_torch_light_level: LightLevel,
    soul_torch_light_level: LightLevel,
    redstone_torch_light_level: LightLevel,
    enabled: bool,

    modify_vanilla_torches: bool,
    apply_to_all_torch_types: bool,
    light_radius: i64,
}

impl Default for TorchSettings {
    fn default() -> Self {
        Self {
            torch_light_level: LightLevel::clamped(DEFAULT_TORCH_LIGHT_LEVEL),
            wall_torch_light_level: LightLevel::clamped(DEFAULT_WALL_TORCH_LIGHT_LEVEL),
            soul_torch_light_level: LightLevel::clamped(DEFAULT_SOUL_TORCH_LIGHT_LEVEL),
            redstone_torch_light_level: LightLevel::clamped(DEFAULT_REDSTONE_TORCH_LIGHT_LEVEL),
            enabled: true,
            modify_vanilla_torches: true,
            apply_to_all_torch_types: true,
            light_radius: DEFAULT_LIGHT_RADIUS,
        }
    }
}

impl TorchSettings {
    pub fn torch_light_level(&self) -> LightLevel {
        self.torch_light_level
    }

    pub fn wall_torch_light_level(&self) -> LightLevel {
        self.wall_torch_light_level
    }

    pub fn soul_torch_light_level(&self) -> LightLevel {
        self.soul_torch_light_level
    }

    pub fn redstone_torch_light_level(&self) -> LightLevel {
        self.redstone_torch_light_level
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn modify_vanilla_torches(&self) -> bool {
        self.modify_vanilla_torches
    }

    pub fn apply_to_all_torch_types(&self) -> bool {
        self.apply_to_all_torch_types
    }

    /// Not clamped; only reported in logs.
    pub fn light_radius(&self) -> i64 {
        self.light_radius
    }

    pub fn set_torch_light_level(&mut self, level: i64) {
        self.torch_light_level = LightLevel::clamped(level);
    }

    pub fn set_wall_torch_light_level(&mut self, level: i64) {
        self.wall_torch_light_level = LightLevel::clamped(level);
    }

    pub fn set_soul_torch_light_level(&mut self, level: i64) {
        self.soul_torch_light_level = LightLevel::clamped(level);
    }

    pub fn set_redstone_torch_light_level(&mut self, level: i64) {
        self.redstone_torch_light_level = LightLevel::clamped(level);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_modify_vanilla_torches(&mut self, modify: bool) {
        self.modify_vanilla_torches = modify;
    }

    pub fn set_apply_to_all_torch_types(&mut self, apply: bool) {
        self.apply_to_all_torch_types = apply;
    }

    pub fn set_light_radius(&mut self, radius: i64) {
        self.light_radius = radius;
    }

    /// Configured light level for a torch variant
    pub fn light_level_for(&self, kind: TorchKind) -> LightLevel {
        match kind {
            TorchKind::Torch => self.torch_light_level,
            TorchKind::WallTorch => self.wall_torch_light_level,
            TorchKind::SoulTorch => self.soul_torch_light_level,
            TorchKind::RedstoneTorch => self.redstone_torch_light_level,
        }
    }

    /// Torch variants that should be modified, with their levels.
    ///
    /// Empty when vanilla torches are not modified. Only the base torches
    /// are included unless all torch types are enabled. `enabled` is not
    /// consulted here; the lifecycle gates on it before applying.
    pub fn targets(&self) -> Vec<(TorchKind, LightLevel)> {
        if !self.modify_vanilla_torches {
            return Vec::new();
        }

        TorchKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_base() || self.apply_to_all_torch_types)
            .map(|kind| (kind, self.light_level_for(kind)))
            .collect()
    }
}

impl fmt::Display for TorchSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TorchSettings {{ torch: {}, wall_torch: {}, soul_torch: {}, redstone_torch: {}, \
             enabled: {}, modify_vanilla_torches: {}, apply_to_all_torch_types: {}, light_radius: {} }}",
            self.torch_light_level,
            self.wall_torch_light_level,
            self.soul_torch_light_level,
            self.redstone_torch_light_level,
            self.enabled,
            self.modify_vanilla_torches,
            self.apply_to_all_torch_types,
            self.light_radius,
        )
    }
}

/// On-disk layout of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<BrightnessSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrightnessSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_light_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_torch_light_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soul_torch_light_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redstone_torch_light_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_vanilla_torches: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_all_torch_types: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_radius: Option<i64>,
}

impl From<&TorchSettings> for SettingsDocument {
    fn from(settings: &TorchSettings) -> Self {
        Self {
            brightness: Some(BrightnessSection {
                torch_light_level: Some(settings.torch_light_level.into()),
                wall_torch_light_level: Some(settings.wall_torch_light_level.into()),
                soul_torch_light_level: Some(settings.soul_torch_light_level.into()),
                redstone_torch_light_level: Some(settings.redstone_torch_light_level.into()),
                enabled: Some(settings.enabled),
            }),
            advanced: Some(AdvancedSection {
                modify_vanilla_torches: Some(settings.modify_vanilla_torches),
                apply_to_all_torch_types: Some(settings.apply_to_all_torch_types),
                light_radius: Some(settings.light_radius),
            }),
        }
    }
}
