use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use log::info;

use crate::config::Config;
use crate::timer::{SegmentTimer, TimerControl};
use crate::types::{MIN_SEGMENT_SECS, TickEvent};

use super::{AppEvent, AppView, Editor, Intent};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub timer: SegmentTimer,
    pub view: AppView,
    pub editor: Option<Editor>,
    pub status: Option<String>,
    pub segments_path: PathBuf,
    /// Editor and help screens are only offered by the full-screen UI.
    pub screens_enabled: bool,
    /// Stop the loop once every segment is done.
    pub exit_when_finished: bool,
    step_secs: i64,
    flash: Duration,
    completed_until: Option<Instant>,
    alert_pending: bool,
}

impl App {
    pub fn new(timer: SegmentTimer, config: &Config) -> Self {
        Self {
            running: true,
            timer,
            view: AppView::Timer,
            editor: None,
            status: None,
            segments_path: config.segments_path.clone(),
            screens_enabled: true,
            exit_when_finished: false,
            step_secs: config.step_secs,
            flash: config.flash,
            completed_until: None,
            alert_pending: false,
        }
    }

    /// Central update function - advance time to `now`, then process the event.
    pub fn update(&mut self, event: AppEvent, now: Instant) {
        self.advance(now);
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key, now),
        }
        if self.exit_when_finished && self.timer.is_finished() {
            self.running = false;
        }
    }

    pub fn step_secs(&self) -> i64 {
        self.step_secs
    }

    /// True while COMPLETED is shown before moving on.
    pub fn is_flashing(&self) -> bool {
        self.completed_until.is_some()
    }

    /// Returns whether a beep is owed, clearing the request.
    pub fn take_alert(&mut self) -> bool {
        std::mem::take(&mut self.alert_pending)
    }

    /// The clock is held while COMPLETED is flashing, so the flash is not
    /// charged to either segment.
    fn advance(&mut self, now: Instant) {
        if let Some(until) = self.completed_until {
            self.timer.hold(now);
            if now >= until {
                self.completed_until = None;
                self.go_next();
            }
            return;
        }

        if let Some(TickEvent::SegmentCompleted { index, audible }) = self.timer.tick(now) {
            info!("segment {} completed", index + 1);
            if audible {
                self.alert_pending = true;
            }
            self.completed_until = Some(now + self.flash);
        }
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match self.view {
            AppView::Editor => {
                self.handle_editor_key(key);
                return;
            }
            AppView::Help => {
                if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                    self.view = AppView::Timer;
                    return;
                }
            }
            AppView::Timer => {}
        }

        let Some(intent) = Intent::from_key(key) else {
            return;
        };
        match intent {
            Intent::TogglePause => {
                if !self.is_flashing() {
                    self.timer.toggle_pause(now);
                }
            }
            Intent::Next => {
                if !self.timer.is_finished() {
                    self.ring();
                    self.completed_until = None;
                    self.go_next();
                }
            }
            Intent::Prev => {
                if self.timer.is_finished() || self.timer.current_index() > 0 {
                    self.ring();
                    self.completed_until = None;
                    self.timer.prev();
                    info!(
                        "restarting segment {} '{}'",
                        self.timer.current_index() + 1,
                        self.timer.current().name
                    );
                }
            }
            Intent::AddTime => {
                if !self.is_flashing() && !self.timer.is_finished() {
                    self.timer.adjust_duration(self.step_secs);
                    self.ring();
                    self.log_adjustment();
                }
            }
            Intent::SubtractTime => {
                if !self.is_flashing()
                    && !self.timer.is_finished()
                    && self.timer.current().planned_secs > MIN_SEGMENT_SECS
                {
                    self.timer.adjust_duration(-self.step_secs);
                    self.ring();
                    self.log_adjustment();
                }
            }
            Intent::ToggleMute => self.timer.toggle_mute(),
            Intent::Edit => {
                if self.screens_enabled && !self.is_flashing() {
                    self.timer.pause(now);
                    self.editor = Some(Editor::new(self.timer.current_index()));
                    self.view = AppView::Editor;
                }
            }
            Intent::Help => {
                if self.screens_enabled {
                    self.view = AppView::Help;
                }
            }
            Intent::Quit => self.running = false,
        }
    }

    fn handle_editor_key(&mut self, key: KeyCode) {
        let Some(editor) = self.editor.as_mut() else {
            self.view = AppView::Timer;
            return;
        };
        if !editor.handle_key(key, &mut self.timer, &self.segments_path) {
            self.editor = None;
            self.view = AppView::Timer;
        }
    }

    fn go_next(&mut self) {
        self.timer.next();
        if self.timer.is_finished() {
            info!("all segments finished");
        } else {
            info!(
                "starting segment {} '{}'",
                self.timer.current_index() + 1,
                self.timer.current().name
            );
        }
    }

    fn ring(&mut self) {
        if !self.timer.is_muted() {
            self.alert_pending = true;
        }
    }

    fn log_adjustment(&self) {
        info!(
            "segment {} now planned for {}s",
            self.timer.current_index() + 1,
            self.timer.current().planned_secs
        );
    }
}
