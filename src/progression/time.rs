//! Leveling time estimates

use serde::{Deserialize, Serialize};

use super::error::ExperienceError;
use super::table::{ExperienceTable, EXPERIENCE_TABLE};

const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;

/// Time needed to gain a given amount of experience.
/// Every unit is rounded up independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelingTime {
    pub experience_needed: u64,
    pub total_hours: u64,
    pub days: u64,
    pub weeks: u64,
    pub months: u64,
}

impl LevelingTime {
    /// Convert an experience requirement into hours, days, weeks and months
    pub fn from_experience(
        experience_needed: u64,
        exp_per_hour: u64,
        hours_per_day: u32,
    ) -> Result<Self, ExperienceError> {
        if exp_per_hour == 0 {
            return Err(ExperienceError::InvalidRate);
        }
        if hours_per_day == 0 {
            return Err(ExperienceError::InvalidHoursPerDay);
        }

        let total_hours = experience_needed.div_ceil(exp_per_hour);
        let days = total_hours.div_ceil(u64::from(hours_per_day));

        Ok(Self {
            experience_needed,
            total_hours,
            days,
            weeks: days.div_ceil(DAYS_PER_WEEK),
            months: days.div_ceil(DAYS_PER_MONTH),
        })
    }
}

impl ExperienceTable {
    /// Estimate how long it takes to go from `start_level` to `target_level`
    pub fn estimate_leveling_time(
        &self,
        start_level: u32,
        target_level: u32,
        exp_per_hour: u64,
        hours_per_day: u32,
    ) -> Result<LevelingTime, ExperienceError> {
        let needed = self.experience_needed(start_level, target_level);
        LevelingTime::from_experience(needed, exp_per_hour, hours_per_day)
    }
}

/// Estimate leveling time on the official table
pub fn estimate_leveling_time(
    start_level: u32,
    target_level: u32,
    exp_per_hour: u64,
    hours_per_day: u32,
) -> Result<LevelingTime, ExperienceError> {
    EXPERIENCE_TABLE.estimate_leveling_time(start_level, target_level, exp_per_hour, hours_per_day)
}
