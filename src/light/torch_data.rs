//! Torch Data - the torch block variants this plugin brightens

use std::fmt;

/// Torch block variants, each with its own configurable light level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorchKind {
    Torch,
    WallTorch,
    SoulTorch,
    RedstoneTorch,
}

impl TorchKind {
    /// Every variant, in the order modifications are applied
    pub const ALL: [TorchKind; 4] = [
        TorchKind::Torch,
        TorchKind::WallTorch,
        TorchKind::SoulTorch,
        TorchKind::RedstoneTorch,
    ];

    /// Block name without namespace
    pub const fn name(self) -> &'static str {
        match self {
            TorchKind::Torch => "torch",
            TorchKind::WallTorch => "wall_torch",
            TorchKind::SoulTorch => "soul_torch",
            TorchKind::RedstoneTorch => "redstone_torch",
        }
    }

    /// Base torches are touched whenever vanilla torches are modified;
    /// the others only when all torch types are enabled.
    pub const fn is_base(self) -> bool {
        matches!(self, TorchKind::Torch | TorchKind::WallTorch)
    }

    /// Namespaced block identifier, e.g. `hytale:wall_torch`
    pub fn block_id(self, namespace: &str) -> String {
        format!("{}:{}", namespace, self.name())
    }
}

impl fmt::Display for TorchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
