//! Plan reports
//!
//! Human-readable and JSON renderings of a leveling calculation.

use std::fmt::Write;

use super::plan::LevelingPlan;
use super::settings::CalculatorSettings;
use crate::progression::{party_label, EXPERIENCE_TABLE};

/// Shown instead of a plan when there is nothing to calculate
pub const NO_PLAN_NOTICE: &str = "Current level must be lower than target level";

/// Format a number with thousands separators (1847300 -> "1,847,300")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a plan, or the notice when there is none, as plain text
pub fn render_text(settings: &CalculatorSettings, plan: Option<&LevelingPlan>) -> String {
    let Some(plan) = plan else {
        return format!("{}\n", NO_PLAN_NOTICE);
    };

    let mut out = String::new();
    let _ = writeln!(out, "Level {} -> {} ({} levels to go)",
        plan.current_level, plan.target_level, plan.levels_to_go());
    let _ = writeln!(out);

    let _ = writeln!(out, "Experience Summary");
    let _ = writeln!(out, "  Experience needed:  {} exp", group_thousands(plan.experience_needed));
    let _ = writeln!(out, "  Base exp/hour:      {} exp/h", group_thousands(settings.base_exp_per_hour));
    let _ = writeln!(out, "  Effective exp/hour: {} exp/h", group_thousands(plan.effective_exp_per_hour));
    if plan.bonus_percentage > 0 {
        let _ = writeln!(out, "  Total bonus:        +{}%", plan.bonus_percentage);
    }
    let _ = writeln!(out);

    let bonuses = &settings.bonuses;
    let _ = writeln!(out, "Bonuses");
    let _ = writeln!(out, "  [{}] Low level bonus (+{}% at level {})",
        check(bonuses.low_level_bonus), plan.low_level_bonus, plan.current_level);
    let _ = writeln!(out, "  [{}] Premium stamina (+50%)", check(bonuses.premium_stamina));
    let _ = writeln!(out, "  [{}] Double experience (+100%)", check(bonuses.double_experience));
    let _ = writeln!(out, "  Party: {}", party_label(bonuses.party_size));
    let _ = writeln!(out);

    let _ = writeln!(out, "Time Estimates ({} hours/day)", settings.hours_per_day);
    let _ = writeln!(out, "  Total hours: {}", group_thousands(plan.total_hours));
    let _ = writeln!(out, "  Days:        {}", group_thousands(plan.days));
    let _ = writeln!(out, "  Weeks:       {}", group_thousands(plan.weeks));
    let _ = writeln!(out, "  Months:      {}", group_thousands(plan.months));
    out
}

/// Render a plan as pretty JSON (`null` when there is no plan)
pub fn render_json(plan: Option<&LevelingPlan>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&plan)
}

/// Render cumulative experience for the given levels, one per line
pub fn render_levels(levels: &[u32]) -> String {
    levels
        .iter()
        .map(|&level| {
            let xp = EXPERIENCE_TABLE.experience_for_level(level);
            let source = if level <= 1 || EXPERIENCE_TABLE.get(level).is_some() {
                "table"
            } else {
                "estimate"
            };
            format!("Level {:>5}: {:>22} exp ({})\n", level, group_thousands(xp), source)
        })
        .collect()
}

fn check(active: bool) -> char {
    if active { 'x' } else { ' ' }
}
