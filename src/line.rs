//! Single status-line front end: one header per segment and a countdown line
//! redrawn in place.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};

use crate::app::App;
use crate::event::Frontend;
use crate::types::SegmentStatus;
use crate::ui::helpers::{format_clock, format_remaining, progress_bar};
use crate::ui::summary::summary_lines;

const BAR_WIDTH: usize = 30;

/// Raw mode without the alternate screen, so earlier segments stay visible.
pub fn init() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), Hide)?;
    Ok(())
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), Show)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct LineFrontend<W: Write> {
    out: W,
    header_for: Option<usize>,
    announced: bool,
}

impl<W: Write> LineFrontend<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_for: None,
            announced: false,
        }
    }

    fn intro(&mut self, app: &App) -> io::Result<()> {
        queue!(
            self.out,
            Print(format!(
                "Demo Timer - total planned time: {}\r\n",
                format_clock(app.timer.planned_total().as_secs())
            )),
            Print("Press any listed hotkey while this window is focused.\r\n")
        )?;
        if let Some(status) = &app.status {
            queue!(self.out, Print(format!("{status}\r\n")))?;
        }
        Ok(())
    }

    fn header(&mut self, app: &App) -> io::Result<()> {
        let timer = &app.timer;
        queue!(
            self.out,
            Print(format!(
                "\r\nSegment {}/{}: {}\r\nControls: Space=Pause/Resume  n=Next  p=Prev  \
                 +=+{step}s  -=-{step}s  m=Mute  q=Quit\r\n",
                timer.current_index() + 1,
                timer.segments().len(),
                timer.current().name,
                step = app.step_secs()
            ))
        )
    }
}

pub fn status_line(app: &App) -> String {
    let timer = &app.timer;
    let muted = if timer.is_muted() { "  (muted)" } else { "" };
    format!(
        "{}  {} <- {} [{}] | Demo Left: {}{muted}",
        progress_bar(timer.progress(), BAR_WIDTH),
        format_remaining(timer.remaining_in_segment()),
        format_clock(timer.current().planned_secs),
        timer.status().label(),
        format_remaining(timer.total_remaining()),
    )
}

impl<W: Write> Frontend for LineFrontend<W> {
    fn draw(&mut self, app: &App, _now: Instant) -> Result<()> {
        if app.timer.is_finished() {
            return Ok(());
        }
        let index = app.timer.current_index();
        match self.header_for {
            None => {
                self.intro(app)?;
                self.header(app)?;
            }
            Some(shown) if shown != index => {
                queue!(self.out, Print("\r\n"))?;
                self.header(app)?;
            }
            Some(_) if self.announced => return Ok(()),
            Some(_) => {}
        }
        if self.header_for != Some(index) {
            self.header_for = Some(index);
            self.announced = false;
        }

        queue!(
            self.out,
            MoveToColumn(0),
            Print(status_line(app)),
            Clear(ClearType::UntilNewLine)
        )?;
        if app.timer.status() == SegmentStatus::Completed {
            queue!(self.out, Print("\r\n\u{2705} Segment complete."))?;
            self.announced = true;
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, app: &App, now: Instant) -> Result<()> {
        if app.timer.is_finished() {
            queue!(self.out, Print("\r\n\r\nAll segments finished. Good show!\r\n\r\n"))?;
            for line in summary_lines(&app.timer.summary(now)) {
                queue!(self.out, Print(format!("{line}\r\n")))?;
            }
        } else {
            queue!(self.out, Print("\r\nQuitting.\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::app::AppEvent;
    use crate::config::{Config, UiMode};
    use crate::timer::SegmentTimer;
    use crate::types::Segment;

    fn app() -> App {
        let config = Config {
            segments_path: PathBuf::from("segments.txt"),
            ui: UiMode::Line,
            start_paused: false,
            muted: false,
            tick_rate: Duration::from_millis(100),
            step_secs: 10,
            flash: Duration::from_millis(600),
        };
        let timer = SegmentTimer::new(vec![Segment::new("Intro", 60), Segment::new("Q&A", 30)])
            .unwrap();
        App::new(timer, &config)
    }

    fn output(frontend: &LineFrontend<Vec<u8>>) -> String {
        String::from_utf8_lossy(&frontend.out).into_owned()
    }

    #[test]
    fn test_status_line_format() {
        let app = app();
        assert_eq!(
            status_line(&app),
            format!(
                "[{}]  01:00 <- 01:00 [RUNNING] | Demo Left: 01:30",
                "-".repeat(BAR_WIDTH)
            )
        );
    }

    #[test]
    fn test_draw_prints_header_once_per_segment() {
        let mut app = app();
        let mut frontend = LineFrontend::new(Vec::new());
        let t0 = Instant::now();
        app.update(AppEvent::Tick, t0);
        frontend.draw(&app, t0).unwrap();
        frontend.draw(&app, t0).unwrap();
        let text = output(&frontend);
        assert!(text.starts_with("Demo Timer - total planned time: 01:30"));
        assert_eq!(text.matches("Segment 1/2: Intro").count(), 1);

        app.update(AppEvent::Tick, t0 + Duration::from_secs(60));
        frontend.draw(&app, t0).unwrap();
        frontend.draw(&app, t0).unwrap();
        let text = output(&frontend);
        assert_eq!(text.matches("Segment complete.").count(), 1);
        assert!(text.contains("[COMPLETED]"));

        app.update(AppEvent::Tick, t0 + Duration::from_secs(61));
        frontend.draw(&app, t0).unwrap();
        assert!(output(&frontend).contains("Segment 2/2: Q&A"));
    }

    #[test]
    fn test_finish_prints_summary_or_quit() {
        let mut app = app();
        let mut frontend = LineFrontend::new(Vec::new());
        frontend.finish(&app, Instant::now()).unwrap();
        assert!(output(&frontend).contains("Quitting."));

        app.update(AppEvent::KeyPress(crossterm::event::KeyCode::Char('n')), Instant::now());
        app.update(AppEvent::KeyPress(crossterm::event::KeyCode::Char('n')), Instant::now());
        let mut frontend = LineFrontend::new(Vec::new());
        frontend.finish(&app, Instant::now()).unwrap();
        let text = output(&frontend);
        assert!(text.contains("All segments finished. Good show!"));
        assert!(text.contains("Segments: 2"));
    }
}
