use serde::{Serialize, Serializer};
use std::fmt;

/// A day of the week as it appears on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Rendering order. Output keys follow this order too.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Maandag",
            Day::Tuesday => "Dinsdag",
            Day::Wednesday => "Woensdag",
            Day::Thursday => "Donderdag",
            Day::Friday => "Vrijdag",
            Day::Saturday => "Zaterdag",
            Day::Sunday => "Zondag",
        }
    }

    /// Exact label lookup, as a checkbox's day attribute would carry it.
    pub fn from_label(label: &str) -> Option<Day> {
        Day::ALL.iter().copied().find(|d| d.label() == label)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
