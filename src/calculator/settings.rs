//! Calculator settings
//!
//! Settings are stored as RON, with fallback to defaults when the file is
//! missing or unreadable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progression::bonus::{BonusSelection, MAX_PARTY_SIZE};

/// Highest level accepted as calculator input
pub const MAX_LEVEL: u32 = 3000;

/// Experience per hour used when none is given
pub const FALLBACK_EXP_PER_HOUR: u64 = 1000;

/// Hours per day used when none is given
pub const FALLBACK_HOURS_PER_DAY: u32 = 8;

const SETTINGS_FILE: &str = "calculator.ron";

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Inputs of a leveling calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub current_level: u32,
    pub target_level: u32,
    /// Experience per hour without bonuses
    pub base_exp_per_hour: u64,
    pub hours_per_day: u32,
    pub bonuses: BonusSelection,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            current_level: 1,
            target_level: 50,
            base_exp_per_hour: 50_000,
            hours_per_day: FALLBACK_HOURS_PER_DAY,
            bonuses: BonusSelection::default(),
        }
    }
}

impl CalculatorSettings {
    /// Coerce out-of-range input into usable values.
    ///
    /// Empty (zero) fields take their fallback, levels are kept within
    /// 1..=3000, hours within 1..=24 and the party within 1..=5.
    pub fn sanitized(self) -> Self {
        let current_level = self.current_level.clamp(1, MAX_LEVEL);
        let target_level = match self.target_level {
            0 => (current_level + 1).min(MAX_LEVEL),
            level => level.min(MAX_LEVEL),
        };
        let base_exp_per_hour = match self.base_exp_per_hour {
            0 => FALLBACK_EXP_PER_HOUR,
            rate => rate,
        };
        let hours_per_day = match self.hours_per_day {
            0 => FALLBACK_HOURS_PER_DAY,
            hours => hours.min(24),
        };

        Self {
            current_level,
            target_level,
            base_exp_per_hour,
            hours_per_day,
            bonuses: BonusSelection {
                party_size: self.bonuses.party_size.clamp(1, MAX_PARTY_SIZE),
                ..self.bonuses
            },
        }
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings = ron::from_str(&content)?;
        log::info!("Loaded calculator settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a RON file, using defaults if it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Write settings to a RON file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, ron)?;
        log::info!("Saved calculator settings to {}", path.display());
        Ok(())
    }
}

/// Default settings file location
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "tibia-leveling", "TibiaLeveling") {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Write the default settings to `path` for easy editing
pub fn export_default_settings(path: &Path) -> Result<(), SettingsError> {
    CalculatorSettings::default().save(path)
}
