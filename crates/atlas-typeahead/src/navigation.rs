//! Selection redirect
//!
//! A committed label is resolved back to a region code and the browsing
//! context is sent to `/<code>/` with the code lowercased. The redirect
//! itself is injected through [`Navigate`], so hosts can do a full page
//! load, client-side routing, or just record the request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use atlas_regions::Entry;

use crate::error::NavigationError;

/// Capability to send the browsing context to a path.
pub trait Navigate {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError>;
}

impl<F> Navigate for F
where
    F: FnMut(&str) -> Result<(), NavigationError>,
{
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        self(path)
    }
}

/// Code of the entry whose label equals `label`, ignoring case.
///
/// The whole table is scanned; with duplicate labels the last entry wins.
pub fn resolve_code<'a>(entries: &'a [Entry], label: &str) -> Option<&'a str> {
    let wanted = label.to_uppercase();
    let mut found = None;
    for entry in entries {
        if entry.label.to_uppercase() == wanted {
            found = Some(entry.code.as_str());
        }
    }
    found
}

/// Redirect path for a region code: `US/FL` -> `/us/fl/`.
pub fn target_path(code: &str) -> String {
    format!("/{}/", code.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRecord {
    pub url: Url,
    pub requested_at: DateTime<Utc>,
}

/// Resolves paths against a site origin and keeps every request.
#[derive(Debug, Clone)]
pub struct LocationNavigator {
    base: Url,
    history: Vec<NavigationRecord>,
}

impl LocationNavigator {
    pub fn new(base: &str) -> Result<Self, NavigationError> {
        let base = Url::parse(base).map_err(|e| NavigationError::InvalidBase(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(NavigationError::InvalidBase(base.to_string()));
        }

        Ok(Self {
            base,
            history: Vec::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Most recent navigation, if any.
    pub fn current(&self) -> Option<&Url> {
        self.history.last().map(|record| &record.url)
    }

    pub fn history(&self) -> &[NavigationRecord] {
        &self.history
    }
}

impl Navigate for LocationNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        if !path.starts_with('/') {
            return Err(NavigationError::InvalidPath(path.to_string()));
        }

        let url = self
            .base
            .join(path)
            .map_err(|e| NavigationError::InvalidPath(format!("{path}: {e}")))?;

        tracing::info!(url = %url, "Navigating");

        self.history.push(NavigationRecord {
            url,
            requested_at: Utc::now(),
        });
        Ok(())
    }
}
