//! Prefix matching against the region table
//!
//! An entry is admitted by the first rule that holds:
//! 1. its label starts with the input
//! 2. its code starts with the input
//! 3. its code has a `/` and the part after it starts with the input
//!
//! All comparisons ignore case. Table order is kept.

use serde::{Deserialize, Serialize};

use atlas_regions::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Label,
    Code,
    SubCode,
}

/// An admitted entry together with its position in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub index: usize,
    pub entry: &'a Entry,
    pub rule: MatchRule,
}

/// Case-insensitive comparison of the first `needle.chars().count()`
/// characters of `haystack` against `needle`.
pub fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    let width = needle.chars().count();
    let prefix: String = haystack.chars().take(width).collect();
    if prefix.chars().count() < width {
        return false;
    }
    prefix.to_uppercase() == needle.to_uppercase()
}

/// Which rule, if any, admits `entry` for `input`.
pub fn classify(input: &str, entry: &Entry) -> Option<MatchRule> {
    if input.is_empty() {
        return None;
    }

    if starts_with_ignore_case(&entry.label, input) {
        Some(MatchRule::Label)
    } else if starts_with_ignore_case(&entry.code, input) {
        Some(MatchRule::Code)
    } else if entry
        .sub_code()
        .is_some_and(|sub| starts_with_ignore_case(sub, input))
    {
        Some(MatchRule::SubCode)
    } else {
        None
    }
}

/// Stable filter of `entries`. Empty input matches nothing.
pub fn match_entries<'a>(input: &str, entries: &'a [Entry]) -> Vec<Match<'a>> {
    if input.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            classify(input, entry).map(|rule| Match { index, entry, rule })
        })
        .collect()
}
