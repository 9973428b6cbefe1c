use std::path::Path;

use crossterm::event::KeyCode;
use log::info;

use crate::segments;
use crate::timer::SegmentTimer;
use crate::types::Segment;

const NEW_SEGMENT_NAME: &str = "New Segment";
const NEW_SEGMENT_SECS: u64 = 60;
pub const EDITOR_HINT: &str =
    "Esc/e: close  Up/Down: move  Left/Right/Tab: column  Enter/F2: edit  a: add  Del: delete  s: save";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorColumn {
    Name,
    Duration,
}

/// In-app segment editor state.
#[derive(Clone, Debug)]
pub struct Editor {
    pub row: usize,
    pub column: EditorColumn,
    /// Text being typed while a cell is in edit mode.
    pub buffer: Option<String>,
    pub message: String,
}

impl Editor {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            column: EditorColumn::Name,
            buffer: None,
            message: EDITOR_HINT.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Handle a key. Returns `false` once the editor should close.
    pub fn handle_key(&mut self, key: KeyCode, timer: &mut SegmentTimer, path: &Path) -> bool {
        if self.buffer.is_some() {
            self.handle_edit_key(key, timer);
            return true;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('e' | 'E') => return false,
            KeyCode::Up => self.row = self.row.saturating_sub(1),
            KeyCode::Down => {
                self.row = (self.row + 1).min(timer.segments().len().saturating_sub(1));
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.column = match self.column {
                    EditorColumn::Name => EditorColumn::Duration,
                    EditorColumn::Duration => EditorColumn::Name,
                };
            }
            KeyCode::Enter | KeyCode::F(2) => self.begin_edit(timer),
            KeyCode::Char('a' | 'A') => {
                timer.insert_after(self.row, Segment::new(NEW_SEGMENT_NAME, NEW_SEGMENT_SECS));
                self.row += 1;
            }
            KeyCode::Delete => {
                if timer.remove(self.row) {
                    self.row = self.row.min(timer.segments().len() - 1);
                } else {
                    self.message = "At least one segment is required.".to_string();
                }
            }
            KeyCode::Char('s' | 'S') => {
                self.message = match segments::save_segments(path, timer.segments()) {
                    Ok(()) => format!("Saved: {}", path.display()),
                    Err(err) => format!("Save failed: {err}"),
                };
            }
            _ => {}
        }
        true
    }

    fn begin_edit(&mut self, timer: &SegmentTimer) {
        let Some(segment) = timer.segments().get(self.row) else {
            return;
        };
        self.buffer = Some(match self.column {
            EditorColumn::Name => segment.name.clone(),
            EditorColumn::Duration => {
                format!("{}:{:02}", segment.planned_secs / 60, segment.planned_secs % 60)
            }
        });
    }

    fn handle_edit_key(&mut self, key: KeyCode, timer: &mut SegmentTimer) {
        match key {
            KeyCode::Esc => self.buffer = None,
            KeyCode::Enter => self.commit(timer),
            KeyCode::Backspace => {
                if let Some(buffer) = self.buffer.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                if let Some(buffer) = self.buffer.as_mut() {
                    buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn commit(&mut self, timer: &mut SegmentTimer) {
        let Some(buffer) = self.buffer.take() else {
            return;
        };
        let value = buffer.trim();
        match self.column {
            EditorColumn::Name => {
                if !value.is_empty() {
                    timer.rename(self.row, value.to_string());
                    info!("renamed segment {} to '{value}'", self.row + 1);
                }
            }
            EditorColumn::Duration => match segments::parse_duration(value) {
                Ok(secs) if secs > 0 => {
                    timer.set_duration(self.row, secs);
                    info!("segment {} planned for {secs}s", self.row + 1);
                }
                Ok(_) => self.message = "Duration must be greater than zero.".to_string(),
                Err(err) => self.message = format!("{err}, unchanged."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> SegmentTimer {
        SegmentTimer::new(vec![Segment::new("Intro", 60), Segment::new("Demo", 90)]).unwrap()
    }

    fn type_text(editor: &mut Editor, timer: &mut SegmentTimer, text: &str) {
        for ch in text.chars() {
            editor.handle_key(KeyCode::Char(ch), timer, Path::new("unused"));
        }
    }

    #[test]
    fn test_rename_segment() {
        let mut timer = timer();
        let mut editor = Editor::new(0);
        let path = Path::new("unused");
        editor.handle_key(KeyCode::Enter, &mut timer, path);
        assert_eq!(editor.buffer.as_deref(), Some("Intro"));
        for _ in 0.."Intro".len() {
            editor.handle_key(KeyCode::Backspace, &mut timer, path);
        }
        type_text(&mut editor, &mut timer, "Welcome");
        editor.handle_key(KeyCode::Enter, &mut timer, path);
        assert!(!editor.is_editing());
        assert_eq!(timer.segments()[0].name, "Welcome");
    }

    #[test]
    fn test_edit_duration() {
        let mut timer = timer();
        let mut editor = Editor::new(0);
        let path = Path::new("unused");
        editor.handle_key(KeyCode::Down, &mut timer, path);
        editor.handle_key(KeyCode::Tab, &mut timer, path);
        editor.handle_key(KeyCode::F(2), &mut timer, path);
        assert_eq!(editor.buffer.as_deref(), Some("1:30"));
        editor.buffer = Some(String::new());
        type_text(&mut editor, &mut timer, "2:15");
        editor.handle_key(KeyCode::Enter, &mut timer, path);
        assert_eq!(timer.segments()[1].planned_secs, 135);
    }

    #[test]
    fn test_invalid_duration_is_reported() {
        let mut timer = timer();
        let mut editor = Editor::new(0);
        editor.column = EditorColumn::Duration;
        editor.buffer = Some("soon".to_string());
        editor.handle_key(KeyCode::Enter, &mut timer, Path::new("unused"));
        assert_eq!(timer.segments()[0].planned_secs, 60);
        assert!(editor.message.contains("invalid duration"));
    }

    #[test]
    fn test_add_and_delete_rows() {
        let mut timer = timer();
        let mut editor = Editor::new(0);
        let path = Path::new("unused");
        editor.handle_key(KeyCode::Char('a'), &mut timer, path);
        assert_eq!(editor.row, 1);
        assert_eq!(timer.segments()[1], Segment::new("New Segment", 60));
        editor.handle_key(KeyCode::Delete, &mut timer, path);
        editor.handle_key(KeyCode::Delete, &mut timer, path);
        assert_eq!(timer.segments().len(), 1);
        editor.handle_key(KeyCode::Delete, &mut timer, path);
        assert_eq!(timer.segments().len(), 1);
        assert!(editor.message.contains("At least one"));
    }

    #[test]
    fn test_save_writes_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segments.txt");
        let mut timer = timer();
        let mut editor = Editor::new(0);
        editor.handle_key(KeyCode::Char('s'), &mut timer, &path);
        assert!(editor.message.starts_with("Saved"));
        let saved = segments::load_or_default(&path);
        assert_eq!(saved.source, segments::PlanSource::File(path.clone()));
        assert_eq!(saved.segments, timer.segments());
    }

    #[test]
    fn test_escape_closes_editor() {
        let mut timer = timer();
        let mut editor = Editor::new(0);
        let path = Path::new("unused");
        editor.handle_key(KeyCode::Enter, &mut timer, path);
        assert!(editor.handle_key(KeyCode::Esc, &mut timer, path));
        assert!(!editor.is_editing());
        assert!(!editor.handle_key(KeyCode::Esc, &mut timer, path));
    }
}
