#[cfg(test)]
mod tests {
    use crate::event::ControlChange;
    use crate::form::FormController;
    use crate::model::day::Day;

    #[test]
    fn test_nothing_checked_saves_empty_object() {
        let mut form = FormController::new();
        assert_eq!(form.save().unwrap(), "{}");
        assert_eq!(form.output(), "{}");
    }

    #[test]
    fn test_whitespace_only_text_is_excluded() {
        let mut form = FormController::new();
        form.handle(&ControlChange::checkbox(Day::Wednesday, true));
        assert!(form.set_text(Day::Wednesday, "  "));

        assert!(form.availability().is_empty());
        assert_eq!(form.save().unwrap(), "{}");
    }

    #[test]
    fn test_single_checked_day() {
        let mut form = FormController::new();
        form.handle(&ControlChange::checkbox(Day::Friday, true));
        form.set_text(Day::Friday, "20:30 - 21:30");

        assert_eq!(form.save().unwrap(), "{\n    \"Vrijdag\": \"20:30 - 21:30\"\n}");
    }

    #[test]
    fn test_uncheck_before_save_excludes_and_clears() {
        let mut form = FormController::new();
        form.handle(&ControlChange::checkbox(Day::Thursday, true));
        form.set_text(Day::Thursday, "19:00 - 20:00");
        form.handle(&ControlChange::checkbox(Day::Thursday, false));

        assert_eq!(form.save().unwrap(), "{}");
        assert_eq!(form.row(Day::Thursday).text(), "");
        assert!(!form.row(Day::Thursday).is_enabled());
    }

    #[test]
    fn test_recheck_starts_empty() {
        let mut form = FormController::new();
        form.set_checked(Day::Monday, true);
        form.set_text(Day::Monday, "08:00");
        form.set_checked(Day::Monday, false);

        let row = form.set_checked(Day::Monday, true);
        assert!(row.is_enabled());
        assert_eq!(row.text(), "");
    }

    #[test]
    fn test_inclusion_and_trimming() {
        let mut form = FormController::new();
        form.set_checked(Day::Tuesday, true);
        form.set_text(Day::Tuesday, " 20:30 - 21:30 ");
        form.set_checked(Day::Friday, true);
        form.set_text(Day::Friday, "18:00-19:00");
        form.set_checked(Day::Sunday, true);
        // Typing into an unchecked row is refused.
        assert!(!form.set_text(Day::Saturday, "12:00"));

        let config = form.availability();
        for day in Day::ALL {
            let row = form.row(day);
            let expected = row.is_checked() && !row.text().trim().is_empty();
            assert_eq!(config.contains(day), expected, "{}", day);
        }
        assert_eq!(config.get(Day::Tuesday), Some("20:30 - 21:30"));

        assert_eq!(
            form.save().unwrap(),
            "{\n    \"Dinsdag\": \"20:30 - 21:30\",\n    \"Vrijdag\": \"18:00-19:00\"\n}"
        );
    }

    #[test]
    fn test_output_follows_day_order_not_check_order() {
        let mut form = FormController::new();
        form.set_checked(Day::Sunday, true);
        form.set_text(Day::Sunday, "a");
        form.set_checked(Day::Monday, true);
        form.set_text(Day::Monday, "b");

        let days: Vec<Day> = form.availability().iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Day::Monday, Day::Sunday]);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut form = FormController::new();
        form.set_checked(Day::Saturday, true);
        form.set_text(Day::Saturday, "10:00 - 11:00");

        let first = form.save().unwrap().to_string();
        let second = form.save().unwrap().to_string();
        assert_eq!(first, second);
    }
}
