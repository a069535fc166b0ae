//! Configuration loading and types for the attendance engine.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ShiftDetection, ShiftRules, ShiftThresholds, WorkBands};
