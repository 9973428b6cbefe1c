/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Config, UiMode};
use crate::segments::{self, PlanSource};
use crate::ui::helpers::format_clock;

#[derive(Parser)]
#[command(
    name = "demotimer",
    version,
    about = "demotimer - A terminal countdown timer for presentation segments"
)]
pub struct Cli {
    /// Segment plan file (`name,duration` per line)
    #[arg(short = 'f', long = "file", env = "DEMOTIMER_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Front end to run
    #[arg(long, value_enum, default_value_t = UiMode::Tui, env = "DEMOTIMER_UI")]
    pub ui: UiMode,

    /// Start with the timer paused
    #[arg(long)]
    pub paused: bool,

    /// Start with the completion beep muted
    #[arg(long)]
    pub muted: bool,

    /// Refresh interval in milliseconds
    #[arg(long = "tick-ms", default_value_t = 100)]
    pub tick_ms: u64,

    /// Seconds added or removed by +/-
    #[arg(long, default_value_t = 10)]
    pub step: u64,

    /// How long a completed segment is shown before advancing, in milliseconds
    #[arg(long = "flash-ms", default_value_t = 600)]
    pub flash_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse the plan file and print the segments it yields
    Check,
    /// Write the built-in default plan to the plan file
    Init {
        #[arg(long)]
        force: bool,
    },
}

/// Execute a CLI command (check or init).
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Check => handle_check(config),
        Command::Init { force } => handle_init(config, force),
    }
}

fn handle_check(config: &Config) -> Result<()> {
    let plan = segments::load_or_default(&config.segments_path);
    match &plan.source {
        PlanSource::File(path) => println!("Plan: {}", path.display()),
        PlanSource::Defaults => println!(
            "Plan: built-in defaults ({} not used)",
            config.segments_path.display()
        ),
    }
    for (index, segment) in plan.segments.iter().enumerate() {
        println!(
            "  {:>2}. {:<30} {}",
            index + 1,
            segment.name,
            format_clock(segment.planned_secs)
        );
    }
    let total: u64 = plan.segments.iter().map(|s| s.planned_secs).sum();
    println!("Total planned time: {}", format_clock(total));
    for warning in &plan.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}

fn handle_init(config: &Config, force: bool) -> Result<()> {
    segments::write_defaults(&config.segments_path, force)?;
    println!(
        "Wrote default segments to {}",
        config.segments_path.display()
    );
    Ok(())
}
