//! Light module - light levels and the torch variants they apply to

pub mod light_level;
pub mod torch_data;

pub use light_level::{LightLevel, MAX_LIGHT_LEVEL, MIN_LIGHT_LEVEL};
pub use torch_data::TorchKind;
