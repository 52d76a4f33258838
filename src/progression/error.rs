//! Errors raised by the experience and leveling calculations

use thiserror::Error;

/// Experience calculation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperienceError {
    /// Experience per hour must be positive to estimate time
    #[error("experience per hour must be greater than zero")]
    InvalidRate,
    /// Hours per day must be positive to convert hours into days
    #[error("hours per day must be greater than zero")]
    InvalidHoursPerDay,
    /// A custom experience table violated one of its invariants
    #[error("invalid experience table: {0}")]
    InvalidTable(String),
}
