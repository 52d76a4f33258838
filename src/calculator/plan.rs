//! Leveling plan
//!
//! Runs the full calculation for a set of calculator settings: bonuses at the
//! current level give the effective rate, which is then turned into time.

use serde::{Deserialize, Serialize};

use super::settings::CalculatorSettings;
use crate::progression::{
    apply_bonuses, low_level_bonus_percent, ExperienceError, ExperienceTable, LevelingTime,
    EXPERIENCE_TABLE,
};

/// Outcome of a leveling calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelingPlan {
    pub current_level: u32,
    pub target_level: u32,
    pub experience_needed: u64,
    /// Experience per hour after bonuses
    pub effective_exp_per_hour: u64,
    /// Total of active bonuses, in percent
    pub bonus_percentage: u32,
    /// Low level bonus available at the current level, whether active or not
    pub low_level_bonus: u32,
    pub total_hours: u64,
    pub days: u64,
    pub weeks: u64,
    pub months: u64,
}

impl LevelingPlan {
    /// Levels left between current and target
    pub fn levels_to_go(&self) -> u32 {
        self.target_level.saturating_sub(self.current_level)
    }

    /// Calculate a plan on the official table.
    ///
    /// Returns `Ok(None)` when the current level is not below the target.
    pub fn calculate(settings: &CalculatorSettings) -> Result<Option<Self>, ExperienceError> {
        Self::calculate_with(&EXPERIENCE_TABLE, settings)
    }

    /// Calculate a plan against a specific experience table
    pub fn calculate_with(
        table: &ExperienceTable,
        settings: &CalculatorSettings,
    ) -> Result<Option<Self>, ExperienceError> {
        let CalculatorSettings {
            current_level,
            target_level,
            base_exp_per_hour,
            hours_per_day,
            bonuses,
        } = *settings;

        if current_level >= target_level {
            log::debug!("No plan: level {} is not below {}", current_level, target_level);
            return Ok(None);
        }

        let breakdown = apply_bonuses(base_exp_per_hour, current_level, &bonuses);
        let effective = breakdown.total_experience;

        let LevelingTime {
            experience_needed,
            total_hours,
            days,
            weeks,
            months,
        } = table.estimate_leveling_time(current_level, target_level, effective, hours_per_day)?;

        log::debug!(
            "Plan {} -> {}: {} exp at {} exp/h (+{}%)",
            current_level, target_level, experience_needed, effective, breakdown.bonus_percentage
        );

        Ok(Some(Self {
            current_level,
            target_level,
            experience_needed,
            effective_exp_per_hour: effective,
            bonus_percentage: breakdown.bonus_percentage,
            low_level_bonus: low_level_bonus_percent(current_level),
            total_hours,
            days,
            weeks,
            months,
        }))
    }
}
