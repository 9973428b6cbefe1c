use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

use crate::app::App;
use crate::event::Frontend;

/// Type alias for the terminal used by the full-screen front end.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Initialise the terminal: enter raw mode + alternate screen.
pub fn init() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Full-screen front end rendered with ratatui.
pub struct TuiFrontend<'a> {
    terminal: &'a mut Terminal,
}

impl<'a> TuiFrontend<'a> {
    pub fn new(terminal: &'a mut Terminal) -> Self {
        Self { terminal }
    }
}

impl Frontend for TuiFrontend<'_> {
    fn draw(&mut self, app: &App, now: Instant) -> Result<()> {
        self.terminal
            .draw(|frame| crate::ui::draw(frame, app, now))?;
        Ok(())
    }
}
