//! Atlas Typeahead
//!
//! Search-box autocomplete over the region table:
//! 1. Every keystroke rebuilds the suggestion panel from a prefix match
//! 2. Arrow keys move the highlight, Enter or a click commits a row
//! 3. A commit copies the label into the box and redirects to `/<code>/`
//!
//! At most one panel is open on a page. The [`Coordinator`] owns every
//! field and enforces that when any field opens or commits.

mod coordinator;
mod error;
mod field;
mod matcher;
mod navigation;
mod panel;

pub use coordinator::{ClickTarget, Coordinator};
pub use error::{NavigationError, TypeaheadError};
pub use field::{AutocompleteField, Commit, Key, KeyResponse, SessionState};
pub use matcher::{classify, match_entries, starts_with_ignore_case, Match, MatchRule};
pub use navigation::{
    resolve_code, target_path, LocationNavigator, Navigate, NavigationRecord,
};
pub use panel::{Panel, Row};

pub type Result<T> = std::result::Result<T, TypeaheadError>;
