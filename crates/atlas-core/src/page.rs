//! Page state container
//!
//! One [`Page`] per document: the region table, every search field, and
//! the sticky header. Hosts forward events and apply the returned effects.

use parking_lot::RwLock;
use std::sync::Arc;

use atlas_header::{HeaderTransition, PointerMove, StickyHeader};
use atlas_regions::Dataset;
use atlas_typeahead::{
    ClickTarget, Commit, Coordinator, Key, KeyResponse, LocationNavigator, Navigate,
};

use crate::config::Config;
use crate::Result;

pub struct Page<N: Navigate = LocationNavigator> {
    config: Config,
    typeahead: Coordinator<N>,
    header: StickyHeader,
}

impl Page<LocationNavigator> {
    /// Build a page that redirects relative to `config.base_url`.
    pub fn new(config: Config) -> Result<Self> {
        let navigator = LocationNavigator::new(&config.base_url)?;
        Self::with_navigator(config, navigator)
    }
}

impl<N: Navigate> Page<N> {
    pub fn with_navigator(config: Config, navigator: N) -> Result<Self> {
        config.validate()?;

        let dataset = match &config.dataset_path {
            Some(path) => Dataset::load(path)?,
            None => Dataset::builtin()?,
        };

        let mut typeahead = Coordinator::new(Arc::new(dataset), navigator);
        for id in &config.search_fields {
            typeahead.register(id.clone())?;
        }

        let header = StickyHeader::new(config.header)?;

        tracing::info!(
            entries = typeahead.dataset().len(),
            fields = config.search_fields.len(),
            "Page initialized"
        );

        Ok(Self {
            config,
            typeahead,
            header,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        self.typeahead.dataset()
    }

    pub fn typeahead(&self) -> &Coordinator<N> {
        &self.typeahead
    }

    pub fn header(&self) -> &StickyHeader {
        &self.header
    }

    pub fn navigator(&self) -> &N {
        self.typeahead.navigator()
    }

    /// Attach autocomplete to another input after construction.
    pub fn attach_search_field(&mut self, id: impl Into<String>) -> Result<()> {
        Ok(self.typeahead.register(id)?)
    }

    // === Search box events ===

    pub fn on_input(&mut self, field: &str, text: &str) {
        self.typeahead.on_input(field, text);
    }

    pub fn on_key_down(&mut self, field: &str, key: Key) -> KeyResponse {
        self.typeahead.on_key_down(field, key)
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Option<Commit> {
        self.typeahead.on_click(target)
    }

    /// Markup of the open suggestion panel, if any.
    pub fn panel_html(&self) -> Option<String> {
        self.typeahead.open_panel().map(|(_, panel)| panel.to_html())
    }

    // === Header events ===

    pub fn set_header_height(&mut self, px: f64) {
        self.header.set_header_height(px);
    }

    pub fn on_pointer_move(&mut self, event: PointerMove) -> Option<HeaderTransition> {
        let panel_open = self.typeahead.any_panel_open();
        self.header.on_pointer_move(event, panel_open)
    }
}

/// Shared handle for host event listeners.
pub struct PageHandle<N: Navigate = LocationNavigator> {
    page: Arc<RwLock<Page<N>>>,
}

impl<N: Navigate> PageHandle<N> {
    pub fn new(page: Page<N>) -> Self {
        Self {
            page: Arc::new(RwLock::new(page)),
        }
    }

    pub fn with_page<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Page<N>) -> T,
    {
        f(&*self.page.read())
    }

    pub fn with_page_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Page<N>) -> T,
    {
        f(&mut *self.page.write())
    }
}

impl<N: Navigate> Clone for PageHandle<N> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
        }
    }
}
