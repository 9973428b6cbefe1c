use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::alert;
use crate::app::{App, AppEvent};

/// A rendering/input adapter driven by the shared loop.
pub trait Frontend {
    fn draw(&mut self, app: &App, now: Instant) -> Result<()>;

    fn poll(&mut self, timeout: Duration) -> Result<Option<AppEvent>> {
        poll(timeout)
    }

    /// Called once after the loop exits, before the terminal is restored.
    fn finish(&mut self, _app: &App, _now: Instant) -> Result<()> {
        Ok(())
    }
}

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run(app: &mut App, frontend: &mut impl Frontend, tick_rate: Duration) -> Result<()> {
    app.update(AppEvent::Tick, Instant::now());

    while app.running {
        frontend.draw(app, Instant::now())?;

        if let Some(event) = frontend.poll(tick_rate)? {
            app.update(event, Instant::now());
        }
        if app.take_alert() {
            alert::beep(&mut io::stdout())?;
        }
    }
    frontend.finish(app, Instant::now())
}
