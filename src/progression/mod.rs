//! Progression systems

pub mod error;
pub mod table;
pub mod xp;
pub mod bonus;
pub mod time;

pub use error::ExperienceError;
pub use table::{ExperienceTable, TableEntry, ANCHOR_LEVEL, EXPERIENCE_TABLE};
pub use xp::{experience_for_level, experience_needed, GROWTH_FACTOR};
pub use bonus::{BonusSelection, BonusBreakdown, apply_bonuses, low_level_bonus_percent};
pub use bonus::{party_bonus_percent, party_label};
pub use time::{LevelingTime, estimate_leveling_time};
