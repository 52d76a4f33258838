//! Tibia Leveling - Entry Point
//!
//! Parses the command line, loads calculator settings and prints the
//! leveling estimate.

use anyhow::{Context, Result};

use tibia_leveling::calculator::{
    export_default_settings, render_json, render_levels, render_text, settings_path,
    CalculatorSettings, LevelingPlan,
};
use tibia_leveling::cli::{self, Command, PlanArgs};

fn main() -> Result<()> {
    // Log to stderr so reports on stdout stay clean
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    log::info!("Starting tibia-leveling v{}", env!("CARGO_PKG_VERSION"));

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'tibia-leveling --help' for usage.");
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{}", cli::USAGE),
        Command::Version => println!("tibia-leveling {}", env!("CARGO_PKG_VERSION")),
        Command::Levels(levels) => print!("{}", render_levels(&levels)),
        Command::ExportConfig(path) => {
            let path = path.unwrap_or_else(settings_path);
            export_default_settings(&path)
                .with_context(|| format!("Failed to export settings to {}", path.display()))?;
            println!("Wrote default settings to {}", path.display());
        }
        Command::Plan(args) => run_plan(&args)?,
    }

    Ok(())
}

/// Calculate and print a leveling plan
fn run_plan(args: &PlanArgs) -> Result<()> {
    let base = match &args.config {
        // An explicit file must load; the default location may be absent.
        Some(path) => CalculatorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => CalculatorSettings::load_or_default(&settings_path()),
    };

    let settings = args.apply(base).sanitized();
    log::debug!("Calculating with {:?}", settings);

    let plan = LevelingPlan::calculate(&settings).context("Leveling calculation failed")?;

    if args.json {
        println!("{}", render_json(plan.as_ref())?);
    } else {
        print!("{}", render_text(&settings, plan.as_ref()));
    }

    Ok(())
}
