mod alert;
mod app;
mod cli;
mod config;
mod error;
mod event;
mod line;
mod logging;
mod segments;
mod timer;
mod tui;
mod types;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::config::{Config, UiMode};
use crate::timer::SegmentTimer;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    match logging::init() {
        Ok(path) => info!("demotimer {} logging to {}", env!("CARGO_PKG_VERSION"), path.display()),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }
    let config = Config::from_cli(&cli_opts);
    if let Some(command) = cli_opts.command {
        return cli::run(command, &config);
    }

    info!("using plan file {}", config.segments_path.display());
    let plan = segments::load_or_default(&config.segments_path);
    let timer = SegmentTimer::new(plan.segments)?
        .with_paused(config.start_paused)
        .with_muted(config.muted);
    let mut app = app::App::new(timer, &config);
    if !plan.warnings.is_empty() {
        app.status = Some(format!(
            "{} plan issue(s), e.g. {}",
            plan.warnings.len(),
            plan.warnings[0]
        ));
    }

    match config.ui {
        UiMode::Tui => {
            let mut terminal = tui::init()?;
            let result = event::run(
                &mut app,
                &mut tui::TuiFrontend::new(&mut terminal),
                config.tick_rate,
            );
            tui::restore()?;
            result
        }
        UiMode::Line => {
            app.screens_enabled = false;
            app.exit_when_finished = true;
            line::init()?;
            let result = event::run(
                &mut app,
                &mut line::LineFrontend::new(io::stdout()),
                config.tick_rate,
            );
            line::restore()?;
            result
        }
    }
}
