//! Ordered region table

use std::collections::HashMap;
use std::path::Path;

use crate::entry::Entry;
use crate::Result;

const BUILTIN_TABLE: &str = include_str!("../data/regions.json");

/// Immutable, insertion-ordered list of entries.
///
/// Codes are expected to be unique. Labels should be too, since selection
/// resolves a label back to its code; see [`Dataset::duplicate_labels`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// The table bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_TABLE)
    }

    /// Parse a `[[code, label], ...]` JSON table.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        let dataset = Self { entries };
        dataset.report_duplicates();
        Ok(dataset)
    }

    /// Load a `[[code, label], ...]` JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), entries = dataset.len(), "Loaded region table");
        Ok(dataset)
    }

    pub fn from_pairs<I, C, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(code, label)| Entry::new(code, label))
            .collect();
        let dataset = Self { entries };
        dataset.report_duplicates();
        dataset
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Labels shared by more than one entry, compared case-insensitively,
    /// in the order they first appear.
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut seen: HashMap<String, (usize, &str)> = HashMap::new();
        for entry in &self.entries {
            seen.entry(entry.label.to_uppercase())
                .or_insert((0, entry.label.as_str()))
                .0 += 1;
        }

        let mut duplicates = Vec::new();
        for entry in &self.entries {
            if let Some((count, first)) = seen.remove(&entry.label.to_uppercase()) {
                if count > 1 {
                    duplicates.push(first);
                }
            }
        }
        duplicates
    }

    fn report_duplicates(&self) {
        let duplicates = self.duplicate_labels();
        if !duplicates.is_empty() {
            tracing::warn!(
                labels = ?duplicates,
                "Region table has duplicate labels; selection resolves to the last entry"
            );
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for Dataset {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let dataset = Self {
            entries: iter.into_iter().collect(),
        };
        dataset.report_duplicates();
        dataset
    }
}
