use crate::error::{FormError, Result};
use crate::form::FormController;
use crate::model::day::Day;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub day: Day,
    pub time: String,
}

/// Parses `day[:time]` arguments. Only the first `:` separates the day, so
/// `Vrijdag:20:30 - 21:30` keeps the whole time range.
pub fn parse_assignments(args: &[String]) -> Result<Vec<Assignment>> {
    args.iter()
        .map(|arg| {
            let (key, time) = arg.split_once(':').unwrap_or((arg.as_str(), ""));
            Ok(Assignment {
                day: expand_day(key.trim())?,
                time: time.to_string(),
            })
        })
        .collect()
}

pub fn expand_day(key: &str) -> Result<Day> {
    let needle = key.to_lowercase();

    // 1. Exact match
    if let Some(day) = Day::ALL.iter().find(|d| d.label().to_lowercase() == needle) {
        return Ok(*day);
    }

    // 2. Prefix match
    let matches: Vec<Day> = Day::ALL
        .iter()
        .filter(|d| !needle.is_empty() && d.label().to_lowercase().starts_with(&needle))
        .copied()
        .collect();

    match matches.as_slice() {
        [day] => Ok(*day),
        [] => Err(FormError::UnknownDay(key.to_string())),
        _ => Err(FormError::AmbiguousDay {
            key: key.to_string(),
            matches: matches.iter().map(|d| d.label()).collect(),
        }),
    }
}

/// Checks each day and types its text, the same way a user would.
pub fn apply(form: &mut FormController, assignments: &[Assignment]) {
    for assignment in assignments {
        form.set_checked(assignment.day, true);
        form.set_text(assignment.day, assignment.time.clone());
    }
}
