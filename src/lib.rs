//! Tibia Leveling - experience table and leveling calculator
//!
//! Resolves cumulative experience for any character level, stacks experience
//! bonuses and estimates how long it takes to reach a target level.

pub mod progression;
pub mod calculator;
pub mod cli;

// Re-export commonly used types
pub use progression::{
    apply_bonuses, estimate_leveling_time, experience_for_level, experience_needed,
    low_level_bonus_percent, BonusBreakdown, BonusSelection, ExperienceError, ExperienceTable,
    LevelingTime, EXPERIENCE_TABLE,
};
pub use calculator::{CalculatorSettings, LevelingPlan};
