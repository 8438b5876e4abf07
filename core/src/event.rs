use crate::model::day::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Checkbox,
    TextInput,
}

/// A change notification from any control inside the form container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlChange {
    pub control: ControlKind,
    /// The control's day attribute, if it carries one.
    pub day: Option<String>,
    pub checked: bool,
}

impl ControlChange {
    pub fn checkbox(day: Day, checked: bool) -> Self {
        Self {
            control: ControlKind::Checkbox,
            day: Some(day.label().to_string()),
            checked,
        }
    }

    pub fn text_input(day: Day) -> Self {
        Self {
            control: ControlKind::TextInput,
            day: Some(day.label().to_string()),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    CheckboxToggled { day: Day, checked: bool },
    Ignored,
}

impl FormEvent {
    pub fn decode(change: &ControlChange) -> FormEvent {
        if change.control != ControlKind::Checkbox {
            return FormEvent::Ignored;
        }
        match change.day.as_deref().and_then(Day::from_label) {
            Some(day) => FormEvent::CheckboxToggled {
                day,
                checked: change.checked,
            },
            None => FormEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_checkbox() {
        let change = ControlChange::checkbox(Day::Wednesday, true);
        assert_eq!(
            FormEvent::decode(&change),
            FormEvent::CheckboxToggled { day: Day::Wednesday, checked: true }
        );
    }

    #[test]
    fn test_decode_text_input_is_ignored() {
        let change = ControlChange::text_input(Day::Wednesday);
        assert_eq!(FormEvent::decode(&change), FormEvent::Ignored);
    }

    #[test]
    fn test_decode_unknown_day_is_ignored() {
        let change = ControlChange {
            control: ControlKind::Checkbox,
            day: Some("Caturday".to_string()),
            checked: true,
        };
        assert_eq!(FormEvent::decode(&change), FormEvent::Ignored);

        let change = ControlChange { day: None, ..change };
        assert_eq!(FormEvent::decode(&change), FormEvent::Ignored);
    }
}
