//! Page-level owner of every search field
//!
//! Dispatches host events to the right field and keeps the page-wide
//! rule that at most one suggestion panel is open at a time.

use std::sync::Arc;

use atlas_regions::Dataset;

use crate::error::TypeaheadError;
use crate::field::{AutocompleteField, Commit, Key, KeyResponse};
use crate::navigation::{resolve_code, target_path, LocationNavigator, Navigate};
use crate::panel::Panel;
use crate::Result;

/// Where a document click landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A row of a field's panel
    Row { field: String, row: usize },
    /// A field's panel outside any row
    Panel(String),
    /// A field's own input element
    Field(String),
    /// Anywhere else
    Elsewhere,
}

pub struct Coordinator<N: Navigate = LocationNavigator> {
    dataset: Arc<Dataset>,
    fields: Vec<AutocompleteField>,
    navigator: N,
}

impl<N: Navigate> Coordinator<N> {
    pub fn new(dataset: Arc<Dataset>, navigator: N) -> Self {
        Self {
            dataset,
            fields: Vec::new(),
            navigator,
        }
    }

    /// Attach autocomplete to the input identified by `id`.
    pub fn register(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.position(&id).is_some() {
            return Err(TypeaheadError::DuplicateField(id));
        }

        tracing::debug!(field = %id, "Registered search field");
        self.fields.push(AutocompleteField::new(id));
        Ok(())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn field(&self, id: &str) -> Option<&AutocompleteField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn fields(&self) -> &[AutocompleteField] {
        &self.fields
    }

    /// The open panel and the field that owns it.
    pub fn open_panel(&self) -> Option<(&str, &Panel)> {
        self.fields
            .iter()
            .find_map(|f| f.panel().map(|panel| (f.id(), panel)))
    }

    pub fn any_panel_open(&self) -> bool {
        self.fields.iter().any(AutocompleteField::is_open)
    }

    /// Close every panel on the page. Returns how many were open.
    pub fn close_all(&mut self) -> usize {
        let closed = self
            .fields
            .iter_mut()
            .map(AutocompleteField::close)
            .filter(|was_open| *was_open)
            .count();
        if closed > 0 {
            tracing::debug!(closed, "Closed suggestion panels");
        }
        closed
    }

    /// The text of `field` changed.
    pub fn on_input(&mut self, field: &str, text: &str) {
        let Some(idx) = self.lookup(field) else {
            return;
        };

        self.close_all();
        self.fields[idx].update_input(text, self.dataset.entries());
    }

    /// A key went down while `field` had focus.
    pub fn on_key_down(&mut self, field: &str, key: Key) -> KeyResponse {
        let Some(idx) = self.lookup(field) else {
            return KeyResponse::default();
        };

        match key {
            Key::ArrowDown => {
                self.fields[idx].move_highlight(1);
                KeyResponse::default()
            }
            Key::ArrowUp => {
                self.fields[idx].move_highlight(-1);
                KeyResponse::default()
            }
            Key::Enter => {
                let commit = self.fields[idx]
                    .highlighted_row()
                    .and_then(|row| self.commit(idx, row));
                KeyResponse {
                    prevent_default: true,
                    commit,
                }
            }
            Key::Other => KeyResponse::default(),
        }
    }

    /// A click anywhere in the document.
    ///
    /// Clicking a row commits it. Clicking the open panel or the input that
    /// owns it leaves it alone. Any other click closes every panel.
    pub fn on_click(&mut self, target: ClickTarget) -> Option<Commit> {
        match target {
            ClickTarget::Row { field, row } => {
                if let Some(idx) = self.lookup(&field) {
                    if self.fields[idx].row_value(row).is_some() {
                        return self.commit(idx, row);
                    }
                }
                self.close_all();
                None
            }
            ClickTarget::Panel(field) | ClickTarget::Field(field) => {
                let owns_open_panel = self.field(&field).is_some_and(AutocompleteField::is_open);
                if !owns_open_panel {
                    self.close_all();
                }
                None
            }
            ClickTarget::Elsewhere => {
                self.close_all();
                None
            }
        }
    }

    fn commit(&mut self, idx: usize, row: usize) -> Option<Commit> {
        let value = self.fields[idx].row_value(row)?;
        let field = self.fields[idx].id().to_string();

        self.fields[idx].set_value(value.clone());
        self.close_all();

        let Some(code) = resolve_code(self.dataset.entries(), &value).map(str::to_string) else {
            tracing::warn!(field = %field, label = %value, "No region matches committed label");
            return Some(Commit {
                field,
                value,
                code: None,
                path: None,
                navigation_error: None,
            });
        };

        let path = target_path(&code);
        let navigation_error = match self.navigator.navigate(&path) {
            Ok(()) => {
                tracing::info!(field = %field, label = %value, path = %path, "Committed selection");
                None
            }
            Err(e) => {
                tracing::warn!(field = %field, path = %path, error = %e, "Navigation failed");
                Some(e)
            }
        };

        Some(Commit {
            field,
            value,
            code: Some(code),
            path: Some(path),
            navigation_error,
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    fn lookup(&self, id: &str) -> Option<usize> {
        let idx = self.position(id);
        if idx.is_none() {
            tracing::debug!(field = %id, "Event for unregistered field ignored");
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigationError;

    fn sample() -> Arc<Dataset> {
        Arc::new(Dataset::from_pairs([
            ("FR", "France"),
            ("US", "United States of America"),
            ("US/FL", "Florida"),
        ]))
    }

    fn coordinator() -> Coordinator {
        let nav = LocationNavigator::new("https://atlas.example/").unwrap();
        let mut coordinator = Coordinator::new(sample(), nav);
        coordinator.register("SearchBox").unwrap();
        coordinator
    }

    fn visited(coordinator: &Coordinator) -> Vec<String> {
        coordinator
            .navigator()
            .history()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut coordinator = coordinator();
        assert!(matches!(
            coordinator.register("SearchBox"),
            Err(TypeaheadError::DuplicateField(id)) if id == "SearchBox"
        ));
        coordinator.register("Other").unwrap();
        assert_eq!(coordinator.fields().len(), 2);
    }

    #[test]
    fn test_input_opens_panel() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "us");

        let (owner, panel) = coordinator.open_panel().unwrap();
        assert_eq!(owner, "SearchBox");
        let values: Vec<&str> = panel.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["United States of America", "Florida"]);
    }

    #[test]
    fn test_clearing_input_closes_panel() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "f");
        assert!(coordinator.any_panel_open());

        coordinator.on_input("SearchBox", "");
        assert!(!coordinator.any_panel_open());
        assert!(coordinator.open_panel().is_none());
    }

    #[test]
    fn test_no_match_leaves_empty_panel() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "zz");
        let (_, panel) = coordinator.open_panel().unwrap();
        assert!(panel.is_empty());

        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        let response = coordinator.on_key_down("SearchBox", Key::Enter);
        assert!(response.prevent_default);
        assert!(response.commit.is_none());
        assert!(visited(&coordinator).is_empty());
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let mut coordinator = Coordinator::new(
            Arc::new(Dataset::from_pairs([
                ("CV", "Cabo Verde"),
                ("KH", "Cambodia"),
                ("CM", "Cameroon"),
            ])),
            LocationNavigator::new("https://atlas.example/").unwrap(),
        );
        coordinator.register("SearchBox").unwrap();
        coordinator.on_input("SearchBox", "ca");

        let highlight = |c: &Coordinator| c.field("SearchBox").unwrap().state().highlight_index;

        coordinator.on_key_down("SearchBox", Key::ArrowUp);
        assert_eq!(highlight(&coordinator), 2);

        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        assert_eq!(highlight(&coordinator), 0);

        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        assert_eq!(highlight(&coordinator), 2);
        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        assert_eq!(highlight(&coordinator), 0);

        let (_, panel) = coordinator.open_panel().unwrap();
        assert_eq!(panel.highlighted(), Some(0));
    }

    #[test]
    fn test_enter_without_highlight() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "fl");
        let response = coordinator.on_key_down("SearchBox", Key::Enter);
        assert!(response.prevent_default);
        assert!(response.commit.is_none());
        assert!(coordinator.any_panel_open());
    }

    #[test]
    fn test_enter_commits_highlighted_row() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "fl");
        coordinator.on_key_down("SearchBox", Key::ArrowDown);
        let response = coordinator.on_key_down("SearchBox", Key::Enter);

        let commit = response.commit.unwrap();
        assert_eq!(commit.value, "Florida");
        assert_eq!(commit.code.as_deref(), Some("US/FL"));
        assert_eq!(commit.path.as_deref(), Some("/us/fl/"));
        assert!(commit.navigated());

        assert_eq!(coordinator.field("SearchBox").unwrap().value(), "Florida");
        assert!(!coordinator.any_panel_open());
        assert_eq!(visited(&coordinator), vec!["/us/fl/"]);
    }

    #[test]
    fn test_click_commits_row() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "us");
        let commit = coordinator
            .on_click(ClickTarget::Row {
                field: "SearchBox".to_string(),
                row: 1,
            })
            .unwrap();

        assert_eq!(commit.value, "Florida");
        assert_eq!(commit.path.as_deref(), Some("/us/fl/"));
        assert_eq!(visited(&coordinator), vec!["/us/fl/"]);
    }

    #[test]
    fn test_click_stale_row_closes() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "us");
        let commit = coordinator.on_click(ClickTarget::Row {
            field: "SearchBox".to_string(),
            row: 7,
        });
        assert!(commit.is_none());
        assert!(!coordinator.any_panel_open());
        assert!(visited(&coordinator).is_empty());
    }

    #[test]
    fn test_commit_duplicate_label_last_wins() {
        let dataset = Arc::new(Dataset::from_pairs([("GE", "Georgia"), ("US/GA", "Georgia")]));
        let mut coordinator =
            Coordinator::new(dataset, LocationNavigator::new("https://atlas.example/").unwrap());
        coordinator.register("SearchBox").unwrap();
        coordinator.on_input("SearchBox", "geo");

        // First row is the country, but the label resolves to the state
        let commit = coordinator
            .on_click(ClickTarget::Row {
                field: "SearchBox".to_string(),
                row: 0,
            })
            .unwrap();
        assert_eq!(commit.code.as_deref(), Some("US/GA"));
        assert_eq!(visited(&coordinator), vec!["/us/ga/"]);
    }

    #[test]
    fn test_navigation_failure_reported() {
        let failing = |_: &str| -> std::result::Result<(), NavigationError> {
            Err(NavigationError::InvalidPath("blocked".to_string()))
        };
        let mut coordinator = Coordinator::new(sample(), failing);
        coordinator.register("SearchBox").unwrap();
        coordinator.on_input("SearchBox", "fr");

        let commit = coordinator
            .on_click(ClickTarget::Row {
                field: "SearchBox".to_string(),
                row: 0,
            })
            .unwrap();
        assert_eq!(commit.path.as_deref(), Some("/fr/"));
        assert!(commit.navigation_error.is_some());
        assert!(!commit.navigated());
        assert_eq!(coordinator.field("SearchBox").unwrap().value(), "France");
    }

    #[test]
    fn test_click_on_own_field_or_panel_keeps_panel() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "f");

        coordinator.on_click(ClickTarget::Field("SearchBox".to_string()));
        assert!(coordinator.any_panel_open());

        coordinator.on_click(ClickTarget::Panel("SearchBox".to_string()));
        assert!(coordinator.any_panel_open());

        coordinator.on_click(ClickTarget::Elsewhere);
        assert!(!coordinator.any_panel_open());
    }

    #[test]
    fn test_close_all_twice() {
        let mut coordinator = coordinator();
        coordinator.on_input("SearchBox", "f");
        assert_eq!(coordinator.close_all(), 1);
        assert_eq!(coordinator.close_all(), 0);
    }

    #[test]
    fn test_single_open_panel_across_fields() {
        let mut coordinator = coordinator();
        coordinator.register("Footer").unwrap();

        coordinator.on_input("Footer", "fr");
        assert_eq!(coordinator.open_panel().map(|(id, _)| id), Some("Footer"));

        coordinator.on_input("SearchBox", "us");
        assert_eq!(coordinator.open_panel().map(|(id, _)| id), Some("SearchBox"));
        assert!(!coordinator.field("Footer").unwrap().is_open());

        // Clicking the other field's input closes the open panel
        coordinator.on_click(ClickTarget::Field("Footer".to_string()));
        assert!(!coordinator.any_panel_open());
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut coordinator = coordinator();
        coordinator.on_input("Missing", "fr");
        assert!(!coordinator.any_panel_open());
        assert_eq!(
            coordinator.on_key_down("Missing", Key::Enter),
            KeyResponse::default()
        );
    }
}
