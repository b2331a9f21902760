//! A single region entry

use serde::{Deserialize, Serialize};

/// One `(code, label)` pair.
///
/// Serialized as a two-element array, `["US/FL", "Florida"]`, which is the
/// shape of the bundled table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entry {
    /// Region code, optionally `PARENT/SUB`
    pub code: String,
    /// Human readable name
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Lowercase slug such as `north-america`
    Continent,
    /// Two-letter country code
    Country,
    /// `PARENT/SUB` code
    Subdivision,
}

impl Entry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Code scope before the first `/`, or the whole code.
    pub fn parent(&self) -> &str {
        match self.code.split_once('/') {
            Some((parent, _)) => parent,
            None => &self.code,
        }
    }

    /// Code part after the first `/`, if any.
    pub fn sub_code(&self) -> Option<&str> {
        self.code.split_once('/').map(|(_, sub)| sub)
    }

    pub fn kind(&self) -> EntryKind {
        if self.code.contains('/') {
            EntryKind::Subdivision
        } else if self.code.chars().any(char::is_lowercase) {
            EntryKind::Continent
        } else {
            EntryKind::Country
        }
    }
}

impl From<(String, String)> for Entry {
    fn from((code, label): (String, String)) -> Self {
        Self { code, label }
    }
}

impl From<Entry> for (String, String) {
    fn from(entry: Entry) -> Self {
        (entry.code, entry.label)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.code)
    }
}
