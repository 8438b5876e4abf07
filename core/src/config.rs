use crate::error::Result;
use crate::model::day::Day;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Checked, non-empty days mapped to their trimmed time text.
///
/// Entries keep insertion order, which is how they serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityConfig {
    entries: Vec<(Day, String)>,
}

impl AvailabilityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value in place if the day is already present.
    pub fn insert(&mut self, day: Day, time: impl Into<String>) {
        let time = time.into();
        match self.entries.iter_mut().find(|(d, _)| *d == day) {
            Some(entry) => entry.1 = time,
            None => self.entries.push((day, time)),
        }
    }

    pub fn get(&self, day: Day) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, t)| t.as_str())
    }

    pub fn contains(&self, day: Day) -> bool {
        self.get(day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &str)> {
        self.entries.iter().map(|(d, t)| (*d, t.as_str()))
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Serialize for AvailabilityConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, time) in &self.entries {
            map.serialize_entry(day, time)?;
        }
        map.end()
    }
}
