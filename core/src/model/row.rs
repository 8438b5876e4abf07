use crate::model::day::Day;

pub const TIME_PLACEHOLDER: &str = "e.g., 20:30 - 21:30";

/// One weekday's toggle and time text.
///
/// Fields are private so that the only way to flip `checked` is through
/// [`crate::FormController::set_checked`], which keeps an unchecked row empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    day: Day,
    checked: bool,
    text: String,
}

impl DayRow {
    pub(crate) fn new(day: Day) -> Self {
        Self {
            day,
            checked: false,
            text: String::new(),
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The time input accepts text only while its checkbox is checked.
    pub fn is_enabled(&self) -> bool {
        self.checked
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &'static str {
        TIME_PLACEHOLDER
    }

    /// Trimmed value if this row belongs in the saved config.
    pub fn entry(&self) -> Option<&str> {
        if !self.checked {
            return None;
        }
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        if !checked {
            self.text.clear();
        }
    }

    pub(crate) fn set_text(&mut self, text: String) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.text = text;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_disabled_and_empty() {
        let row = DayRow::new(Day::Monday);
        assert!(!row.is_checked());
        assert!(!row.is_enabled());
        assert_eq!(row.text(), "");
        assert_eq!(row.placeholder(), "e.g., 20:30 - 21:30");
    }

    #[test]
    fn test_disabled_row_rejects_text() {
        let mut row = DayRow::new(Day::Monday);
        assert!(!row.set_text("10:00".to_string()));
        assert_eq!(row.text(), "");
    }

    #[test]
    fn test_entry_trims() {
        let mut row = DayRow::new(Day::Tuesday);
        row.set_checked(true);
        row.set_text("  20:30 -  21:30 ".to_string());
        assert_eq!(row.entry(), Some("20:30 -  21:30"));

        row.set_text("   ".to_string());
        assert_eq!(row.entry(), None);
    }
}
