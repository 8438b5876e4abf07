use crate::config::AvailabilityConfig;
use crate::error::Result;
use crate::event::{ControlChange, FormEvent};
use crate::model::day::Day;
use crate::model::row::DayRow;
use tracing::{debug, info};

/// Owns the seven day rows and the output field.
#[derive(Debug, Clone)]
pub struct FormController {
    rows: [DayRow; 7],
    output: String,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            rows: Day::ALL.map(DayRow::new),
            output: String::new(),
        }
    }

    pub fn rows(&self) -> &[DayRow] {
        &self.rows
    }

    pub fn row(&self, day: Day) -> &DayRow {
        &self.rows[day.index()]
    }

    /// The only way to change a row's checked flag. Unchecking clears the text.
    pub fn set_checked(&mut self, day: Day, checked: bool) -> &DayRow {
        let row = &mut self.rows[day.index()];
        row.set_checked(checked);
        debug!(day = %day, checked, "checkbox toggled");
        row
    }

    pub fn toggle(&mut self, day: Day) -> &DayRow {
        let checked = !self.row(day).is_checked();
        self.set_checked(day, checked)
    }

    /// Returns false when the row's input is disabled.
    pub fn set_text(&mut self, day: Day, text: impl Into<String>) -> bool {
        self.rows[day.index()].set_text(text.into())
    }

    pub fn handle(&mut self, change: &ControlChange) -> FormEvent {
        let event = FormEvent::decode(change);
        match event {
            FormEvent::CheckboxToggled { day, checked } => {
                self.set_checked(day, checked);
            }
            FormEvent::Ignored => {
                debug!(control = ?change.control, day = ?change.day, "change ignored");
            }
        }
        event
    }

    pub fn availability(&self) -> AvailabilityConfig {
        let mut config = AvailabilityConfig::new();
        for row in &self.rows {
            if let Some(time) = row.entry() {
                config.insert(row.day(), time);
            }
        }
        config
    }

    /// Serializes the current availability into the output field.
    pub fn save(&mut self) -> Result<&str> {
        let config = self.availability();
        self.output = config.to_pretty_json()?;
        info!(days = config.len(), "availability saved");
        Ok(&self.output)
    }

    /// Empty until the first save.
    pub fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_one_row_per_day_in_order() {
        let form = FormController::new();
        let days: Vec<Day> = form.rows().iter().map(|r| r.day()).collect();
        assert_eq!(days, Day::ALL.to_vec());
        assert!(form.rows().iter().all(|r| !r.is_checked() && !r.is_enabled()));
        assert_eq!(form.output(), "");
    }

    #[test]
    fn test_set_checked_touches_one_row() {
        let mut form = FormController::new();
        form.set_checked(Day::Monday, true);
        form.set_text(Day::Monday, "09:00");
        form.set_checked(Day::Tuesday, true);
        form.set_text(Day::Tuesday, "10:00");

        let row = form.set_checked(Day::Monday, false);
        assert_eq!(row.text(), "");
        assert!(!row.is_enabled());
        assert_eq!(form.row(Day::Tuesday).text(), "10:00");
        assert!(form.row(Day::Tuesday).is_enabled());
    }

    #[test]
    fn test_toggle_flips() {
        let mut form = FormController::new();
        assert!(form.toggle(Day::Sunday).is_checked());
        assert!(!form.toggle(Day::Sunday).is_checked());
    }

    #[test]
    fn test_handle_ignores_text_input_changes() {
        let mut form = FormController::new();
        let event = form.handle(&ControlChange::text_input(Day::Friday));
        assert_eq!(event, FormEvent::Ignored);
        assert!(!form.row(Day::Friday).is_checked());
    }
}
