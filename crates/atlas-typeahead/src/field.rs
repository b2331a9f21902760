//! Per-field autocomplete session
//!
//! Holds what one search box knows between events: its current text,
//! the open panel (if any) and the keyboard highlight cursor.

use serde::{Deserialize, Serialize};

use atlas_regions::Entry;

use crate::error::NavigationError;
use crate::matcher::match_entries;
use crate::panel::Panel;

/// Keys the field reacts to. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

impl Key {
    /// Map a DOM `keyCode`.
    pub fn from_code(code: u32) -> Self {
        match code {
            40 => Key::ArrowDown,
            38 => Key::ArrowUp,
            13 => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// What the host should do after a keydown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Suppress the default action (form submission on Enter)
    pub prevent_default: bool,
    pub commit: Option<Commit>,
}

/// Result of committing a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub field: String,
    /// Label copied into the field
    pub value: String,
    /// Code the label resolved to
    pub code: Option<String>,
    /// Redirect path that was requested
    pub path: Option<String>,
    pub navigation_error: Option<NavigationError>,
}

impl Commit {
    pub fn navigated(&self) -> bool {
        self.path.is_some() && self.navigation_error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub input: String,
    /// `-1` when no row is highlighted
    pub highlight_index: isize,
    pub panel: Option<Panel>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            input: String::new(),
            highlight_index: -1,
            panel: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutocompleteField {
    id: String,
    state: SessionState,
}

impl AutocompleteField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: SessionState::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.state.input
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.state.panel.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state.panel.is_some()
    }

    /// Replace the text and rebuild the panel. Empty text leaves it closed.
    pub(crate) fn update_input(&mut self, text: &str, entries: &[Entry]) {
        self.state.input = text.to_string();
        self.close();

        if text.is_empty() {
            return;
        }

        let matches = match_entries(text, entries);
        let panel = Panel::build(&self.id, text, &matches);
        tracing::debug!(field = %self.id, rows = panel.len(), "Rebuilt suggestion panel");
        self.state.panel = Some(panel);
    }

    /// Move the highlight by `delta` rows. No-op without rows.
    pub(crate) fn move_highlight(&mut self, delta: isize) -> Option<usize> {
        let panel = self.state.panel.as_mut()?;
        if panel.is_empty() {
            return None;
        }

        let normalized = panel.set_highlight(self.state.highlight_index + delta)?;
        self.state.highlight_index = normalized as isize;
        tracing::debug!(field = %self.id, row = normalized, "Highlight moved");
        Some(normalized)
    }

    /// Row the Enter key would commit.
    pub(crate) fn highlighted_row(&self) -> Option<usize> {
        if self.state.highlight_index < 0 {
            return None;
        }
        let row = self.state.highlight_index as usize;
        self.state.panel.as_ref()?.row(row).map(|_| row)
    }

    pub(crate) fn row_value(&self, row: usize) -> Option<String> {
        self.state
            .panel
            .as_ref()?
            .row(row)
            .map(|row| row.value.clone())
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.state.input = value;
    }

    /// Drop the panel. Returns whether one was open.
    pub(crate) fn close(&mut self) -> bool {
        self.state.highlight_index = -1;
        self.state.panel.take().is_some()
    }
}
