use ratatui::widgets::TableState;
use tracing::warn;
use weekplan_core::{ControlChange, Day, DayRow, FormController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub form: FormController,
    pub state: TableState,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
    pub saved: bool,
}

impl App {
    pub fn new() -> App {
        let mut state = TableState::default();
        state.select(Some(0));
        App {
            form: FormController::new(),
            state,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
            saved: false,
        }
    }

    pub fn selected_day(&self) -> Day {
        let i = self.state.selected().unwrap_or(0).min(Day::ALL.len() - 1);
        Day::ALL[i]
    }

    pub fn selected_row(&self) -> &DayRow {
        self.form.row(self.selected_day())
    }

    pub fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < Day::ALL.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => Day::ALL.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Flips the selected checkbox through the form's change listener.
    pub fn toggle_selected(&mut self) {
        let day = self.selected_day();
        let checked = !self.form.row(day).is_checked();
        self.form.handle(&ControlChange::checkbox(day, checked));
    }

    pub fn enter_edit_mode(&mut self) {
        if self.selected_row().is_enabled() {
            self.cursor_position = self.selected_row().text().chars().count();
            self.input_mode = InputMode::Editing;
        } else {
            self.status = Some(format!("{} is not checked", self.selected_day()));
        }
    }

    pub fn exit_edit_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let day = self.selected_day();
        let mut text = self.form.row(day).text().to_string();
        let byte_index = byte_index(&text, self.cursor_position);
        text.insert(byte_index, c);
        if self.form.set_text(day, text) {
            self.cursor_position += 1;
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let day = self.selected_day();
        let mut text = self.form.row(day).text().to_string();
        text.remove(byte_index(&text, self.cursor_position - 1));
        if self.form.set_text(day, text) {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.selected_row().text().chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn save(&mut self) {
        let days = self.form.availability().len();
        match self.form.save() {
            Ok(_) => {
                self.saved = true;
                self.status = Some(format!("Saved {} day(s)", days));
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Last saved JSON, if anything was saved.
    pub fn output(&self) -> Option<String> {
        self.saved.then(|| self.form.output().to_string())
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.chars().take(char_index).map(|c| c.len_utf8()).sum()
}
