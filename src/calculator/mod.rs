//! Leveling calculator
//!
//! Ties settings, the progression core and report rendering together.

pub mod settings;
pub mod plan;
pub mod report;

pub use settings::{CalculatorSettings, SettingsError, export_default_settings, settings_path};
pub use plan::LevelingPlan;
pub use report::{group_thousands, render_json, render_levels, render_text, NO_PLAN_NOTICE};
