//! Command line parsing

use std::path::PathBuf;

use thiserror::Error;

use crate::calculator::CalculatorSettings;

pub const USAGE: &str = "\
Tibia Leveling Calculator

Usage: tibia-leveling [command] [options]

Commands:
  plan              Estimate time to reach a target level (default)
  level <N>...      Show cumulative experience for levels
  export-config [PATH]
                    Write the default settings file
  --version         Show version information
  --help            Show this help message

Plan options:
  --from <LEVEL>    Current level
  --to <LEVEL>      Target level
  --rate <EXP>      Base experience per hour, without bonuses
  --hours <HOURS>   Hours played per day
  --party <SIZE>    Party size (1-5)
  --stamina         Premium stamina bonus (+50%)
  --double          Double experience event (+100%)
  --no-low-level    Disable the low level bonus
  --config <PATH>   Settings file to start from
  --json            Print the result as JSON";

/// Command line error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    #[error("missing value for '{0}'")]
    MissingValue(String),
    #[error("invalid value '{value}' for '{flag}'")]
    InvalidValue { flag: String, value: String },
}

/// Overrides given on the command line for a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanArgs {
    pub current_level: Option<u32>,
    pub target_level: Option<u32>,
    pub base_exp_per_hour: Option<u64>,
    pub hours_per_day: Option<u32>,
    pub party_size: Option<u8>,
    pub premium_stamina: bool,
    pub double_experience: bool,
    pub no_low_level: bool,
    pub config: Option<PathBuf>,
    pub json: bool,
}

impl PlanArgs {
    /// Apply the overrides on top of loaded settings
    pub fn apply(&self, mut settings: CalculatorSettings) -> CalculatorSettings {
        if let Some(level) = self.current_level {
            settings.current_level = level;
        }
        if let Some(level) = self.target_level {
            settings.target_level = level;
        }
        if let Some(rate) = self.base_exp_per_hour {
            settings.base_exp_per_hour = rate;
        }
        if let Some(hours) = self.hours_per_day {
            settings.hours_per_day = hours;
        }
        if let Some(size) = self.party_size {
            settings.bonuses.party_size = size;
        }
        if self.premium_stamina {
            settings.bonuses.premium_stamina = true;
        }
        if self.double_experience {
            settings.bonuses.double_experience = true;
        }
        if self.no_low_level {
            settings.bonuses.low_level_bonus = false;
        }
        settings
    }
}

/// Parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Plan(PlanArgs),
    Levels(Vec<u32>),
    ExportConfig(Option<PathBuf>),
    Version,
    Help,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let first = args.peek().cloned();

    match first.as_deref() {
        None => return Ok(Command::Plan(PlanArgs::default())),
        Some("--help") | Some("-h") => return Ok(Command::Help),
        Some("--version") | Some("-v") => return Ok(Command::Version),
        Some("level") => {
            args.next();
            let levels = args
                .map(|arg| parse_value::<u32>("level", arg))
                .collect::<Result<Vec<_>, _>>()?;
            if levels.is_empty() {
                return Err(CliError::MissingValue("level".to_string()));
            }
            return Ok(Command::Levels(levels));
        }
        Some("export-config") => {
            args.next();
            let path = args.next().map(PathBuf::from);
            if let Some(extra) = args.next() {
                return Err(CliError::UnknownArgument(extra));
            }
            return Ok(Command::ExportConfig(path));
        }
        Some("plan") => {
            args.next();
        }
        Some(_) => {}
    }

    let mut plan = PlanArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from" => plan.current_level = Some(parse_next(&arg, &mut args)?),
            "--to" => plan.target_level = Some(parse_next(&arg, &mut args)?),
            "--rate" => plan.base_exp_per_hour = Some(parse_next(&arg, &mut args)?),
            "--hours" => plan.hours_per_day = Some(parse_next(&arg, &mut args)?),
            "--party" => plan.party_size = Some(parse_next(&arg, &mut args)?),
            "--config" => {
                let path = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                plan.config = Some(PathBuf::from(path));
            }
            "--stamina" => plan.premium_stamina = true,
            "--double" => plan.double_experience = true,
            "--no-low-level" => plan.no_low_level = true,
            "--json" => plan.json = true,
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(Command::Plan(plan))
}

fn parse_next<T, I>(flag: &str, args: &mut I) -> Result<T, CliError>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let value = args.next().ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
    parse_value(flag, value)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_default_plan() {
        assert_eq!(parse_args(args(&[])), Ok(Command::Plan(PlanArgs::default())));
    }

    #[test]
    fn test_plan_flags() {
        let cmd = parse_args(args(&[
            "plan", "--from", "100", "--to", "200", "--rate", "1500000", "--hours", "4",
            "--party", "3", "--stamina", "--double", "--no-low-level", "--json",
        ]))
        .unwrap();

        let Command::Plan(plan) = cmd else {
            panic!("expected plan command");
        };
        assert_eq!(plan.current_level, Some(100));
        assert_eq!(plan.target_level, Some(200));
        assert_eq!(plan.base_exp_per_hour, Some(1_500_000));
        assert_eq!(plan.hours_per_day, Some(4));
        assert_eq!(plan.party_size, Some(3));
        assert!(plan.premium_stamina && plan.double_experience && plan.no_low_level && plan.json);
    }

    #[test]
    fn test_plan_command_word_is_optional() {
        let with = parse_args(args(&["plan", "--to", "80"])).unwrap();
        let without = parse_args(args(&["--to", "80"])).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_apply_overrides() {
        let plan = PlanArgs {
            current_level: Some(30),
            party_size: Some(2),
            no_low_level: true,
            ..PlanArgs::default()
        };
        let settings = plan.apply(CalculatorSettings::default());
        assert_eq!(settings.current_level, 30);
        assert_eq!(settings.target_level, 50);
        assert_eq!(settings.bonuses.party_size, 2);
        assert!(!settings.bonuses.low_level_bonus);
    }

    #[test]
    fn test_levels_command() {
        assert_eq!(parse_args(args(&["level", "8", "50"])), Ok(Command::Levels(vec![8, 50])));
        assert_eq!(
            parse_args(args(&["level"])),
            Err(CliError::MissingValue("level".to_string()))
        );
    }

    #[test]
    fn test_export_config_command() {
        assert_eq!(parse_args(args(&["export-config"])), Ok(Command::ExportConfig(None)));
        assert_eq!(
            parse_args(args(&["export-config", "out.ron"])),
            Ok(Command::ExportConfig(Some(PathBuf::from("out.ron"))))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(args(&["--from"])),
            Err(CliError::MissingValue("--from".to_string()))
        );
        assert_eq!(
            parse_args(args(&["--from", "abc"])),
            Err(CliError::InvalidValue { flag: "--from".to_string(), value: "abc".to_string() })
        );
        assert_eq!(
            parse_args(args(&["--party", "300"])),
            Err(CliError::InvalidValue { flag: "--party".to_string(), value: "300".to_string() })
        );
        assert_eq!(
            parse_args(args(&["--fast"])),
            Err(CliError::UnknownArgument("--fast".to_string()))
        );
        assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
        assert_eq!(parse_args(args(&["--version"])), Ok(Command::Version));
    }
}
