//! Suggestion panel
//!
//! The transient list of candidate rows shown under one input field.
//! A panel is never edited in place: every keystroke builds a fresh one.

use serde::Serialize;

use crate::matcher::{Match, MatchRule};

pub const PANEL_CLASS: &str = "autocomplete-items";
pub const ACTIVE_CLASS: &str = "autocomplete-active";

/// One selectable candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Position of the entry in the region table
    pub entry_index: usize,
    /// Leading part of the label shown in bold.
    ///
    /// Empty when the row was admitted by its code or sub-code: only a
    /// label match has a matched label prefix to highlight.
    pub emphasized: String,
    /// Rest of the label
    pub remainder: String,
    /// Full label, copied into the field on commit
    pub value: String,
    pub highlighted: bool,
}

impl Row {
    fn from_match(input: &str, m: &Match<'_>) -> Self {
        let label = &m.entry.label;
        let (emphasized, remainder) = match m.rule {
            MatchRule::Label => split_chars(label, input.chars().count()),
            MatchRule::Code | MatchRule::SubCode => ("", label.as_str()),
        };

        Self {
            entry_index: m.index,
            emphasized: emphasized.to_string(),
            remainder: remainder.to_string(),
            value: label.clone(),
            highlighted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    id: String,
    rows: Vec<Row>,
}

impl Panel {
    /// Build the panel for `field_id` from the matcher output.
    pub fn build(field_id: &str, input: &str, matches: &[Match<'_>]) -> Self {
        Self {
            id: panel_id(field_id),
            rows: matches.iter().map(|m| Row::from_match(input, m)).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.highlighted)
    }

    /// Highlight the row at `index`, wrapping past either end.
    ///
    /// Returns the normalized index, or `None` when the panel has no rows.
    pub fn set_highlight(&mut self, index: isize) -> Option<usize> {
        let count = self.rows.len();
        if count == 0 {
            return None;
        }

        let normalized = if index < 0 {
            count - 1
        } else if index as usize >= count {
            0
        } else {
            index as usize
        };

        for row in &mut self.rows {
            row.highlighted = false;
        }
        self.rows[normalized].highlighted = true;

        Some(normalized)
    }

    /// Markup for the panel. Each row carries its full label in a hidden
    /// input so the host can read the committed value back.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<div id=\"");
        out.push_str(&escape_html(&self.id));
        out.push_str("\" class=\"");
        out.push_str(PANEL_CLASS);
        out.push_str("\">");

        for row in &self.rows {
            if row.highlighted {
                out.push_str("<div class=\"");
                out.push_str(ACTIVE_CLASS);
                out.push_str("\">");
            } else {
                out.push_str("<div>");
            }
            if !row.emphasized.is_empty() {
                out.push_str("<strong>");
                out.push_str(&escape_html(&row.emphasized));
                out.push_str("</strong>");
            }
            out.push_str(&escape_html(&row.remainder));
            out.push_str("<input type=\"hidden\" value=\"");
            out.push_str(&escape_html(&row.value));
            out.push_str("\"></div>");
        }

        out.push_str("</div>");
        out
    }
}

/// Element id of the panel attached to `field_id`.
pub fn panel_id(field_id: &str) -> String {
    format!("{}autocomplete-list", field_id)
}

fn split_chars(text: &str, chars: usize) -> (&str, &str) {
    let cut = text
        .char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text.split_at(cut)
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
