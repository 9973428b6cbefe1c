//! Runtime configuration assembled from command-line flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::cli::Cli;
use crate::segments;

/// Which front end renders the timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UiMode {
    /// Full-screen terminal UI with timeline, editor and summary
    #[default]
    Tui,
    /// Single in-place status line
    Line,
}

/// Largest accepted `--step`, one hour.
const MAX_STEP_SECS: u64 = 3_600;

#[derive(Clone, Debug)]
pub struct Config {
    pub segments_path: PathBuf,
    pub ui: UiMode,
    pub start_paused: bool,
    pub muted: bool,
    pub tick_rate: Duration,
    pub step_secs: i64,
    /// How long COMPLETED stays on screen before advancing.
    pub flash: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let segments_path = cli
            .file
            .clone()
            .unwrap_or_else(|| segments::find_segments_file(&segments::candidate_paths()));
        Self {
            segments_path,
            ui: cli.ui,
            start_paused: cli.paused,
            muted: cli.muted,
            tick_rate: Duration::from_millis(cli.tick_ms.clamp(10, 1_000)),
            step_secs: cli.step.clamp(1, MAX_STEP_SECS) as i64,
            flash: Duration::from_millis(cli.flash_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["demotimer", "--file", "plan.txt"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.segments_path, PathBuf::from("plan.txt"));
        assert_eq!(config.ui, UiMode::Tui);
        assert!(!config.start_paused);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.step_secs, 10);
        assert_eq!(config.flash, Duration::from_millis(600));
    }

    #[test]
    fn test_flags_are_clamped() {
        let cli = Cli::parse_from([
            "demotimer",
            "--file",
            "plan.txt",
            "--ui",
            "line",
            "--paused",
            "--muted",
            "--tick-ms",
            "1",
            "--step",
            "0",
        ]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.ui, UiMode::Line);
        assert!(config.start_paused);
        assert!(config.muted);
        assert_eq!(config.tick_rate, Duration::from_millis(10));
        assert_eq!(config.step_secs, 1);
    }

    #[test]
    fn test_huge_step_stays_positive() {
        let cli = Cli::parse_from([
            "demotimer",
            "--file",
            "plan.txt",
            "--step",
            "18446744073709551615",
        ]);
        assert_eq!(Config::from_cli(&cli).step_secs, 3_600);
    }
}
