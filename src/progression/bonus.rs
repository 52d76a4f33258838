//! Experience bonuses
//!
//! Bonuses are percentages that stack additively: every active bonus is
//! summed first and the base rate is multiplied once by the total.

use serde::{Deserialize, Serialize};

/// Level from which the low level bonus no longer applies
pub const LOW_LEVEL_BONUS_CAP: u32 = 50;

/// Premium stamina bonus (+50%)
pub const PREMIUM_STAMINA_BONUS: u32 = 50;

/// Double experience event bonus (+100%)
pub const DOUBLE_EXPERIENCE_BONUS: u32 = 100;

/// Largest party that still changes the shared experience bonus
pub const MAX_PARTY_SIZE: u8 = 5;

/// Which bonuses are active for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusSelection {
    /// Declining bonus for characters below level 50
    pub low_level_bonus: bool,
    /// Premium stamina (+50%)
    pub premium_stamina: bool,
    /// Double experience event (+100%)
    pub double_experience: bool,
    /// Number of players sharing experience (1 = solo)
    pub party_size: u8,
}

impl BonusSelection {
    /// No bonus active, hunting solo
    pub fn none() -> Self {
        Self {
            low_level_bonus: false,
            premium_stamina: false,
            double_experience: false,
            party_size: 1,
        }
    }
}

impl Default for BonusSelection {
    fn default() -> Self {
        Self {
            low_level_bonus: true,
            ..Self::none()
        }
    }
}

/// Result of applying bonuses to a base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusBreakdown {
    /// Experience per hour before bonuses
    pub base_experience: u64,
    /// Sum of all active bonus percentages
    pub bonus_percentage: u32,
    /// Experience per hour with bonuses applied
    pub total_experience: u64,
}

/// Low level bonus in percent: 100% up to level 2, falling by 25/12 points
/// per level and reaching 0% at level 50.
pub fn low_level_bonus_percent(level: u32) -> u32 {
    if level >= LOW_LEVEL_BONUS_CAP {
        return 0;
    }
    if level <= 2 {
        return 100;
    }

    // ceil(100 - x) == 100 - floor(x)
    let decline = (level - 2) * 25 / 12;
    100u32.saturating_sub(decline)
}

/// Shared experience bonus in percent for a party of `party_size`
pub fn party_bonus_percent(party_size: u8) -> u32 {
    match party_size.min(MAX_PARTY_SIZE) {
        2 => 20,
        3 => 30,
        4 => 50,
        5 => 60,
        _ => 0,
    }
}

/// Display label for a party size, as offered by the calculator
pub fn party_label(party_size: u8) -> String {
    match party_size.min(MAX_PARTY_SIZE) {
        0 | 1 => "Solo".to_string(),
        size => format!("{} Players (+{}%)", size, party_bonus_percent(size)),
    }
}

/// Apply the selected bonuses to a base experience per hour at `level`
pub fn apply_bonuses(base_exp_per_hour: u64, level: u32, selection: &BonusSelection) -> BonusBreakdown {
    let mut bonus_percentage = 0;

    if selection.low_level_bonus {
        bonus_percentage += low_level_bonus_percent(level);
    }
    if selection.premium_stamina {
        bonus_percentage += PREMIUM_STAMINA_BONUS;
    }
    if selection.double_experience {
        bonus_percentage += DOUBLE_EXPERIENCE_BONUS;
    }
    bonus_percentage += party_bonus_percent(selection.party_size);

    let total = u128::from(base_exp_per_hour) * u128::from(100 + bonus_percentage) / 100;

    BonusBreakdown {
        base_experience: base_exp_per_hour,
        bonus_percentage,
        total_experience: u64::try_from(total).unwrap_or(u64::MAX),
    }
}
