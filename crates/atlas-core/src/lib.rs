//! Atlas Core
//!
//! Page-level composition of the region search box and the sticky header.
//! The host forwards DOM events here and applies the returned effects;
//! all state lives on the Rust side.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::{Page, PageHandle};

// Re-export components
pub use atlas_header::{
    HeaderError, HeaderPosition, HeaderStyle, HeaderThresholds, HeaderTransition, HoverTarget,
    PointerMove, StickyHeader,
};
pub use atlas_regions::{Dataset, Entry, EntryKind, RegionError};
pub use atlas_typeahead::{
    ClickTarget, Commit, Coordinator, Key, KeyResponse, LocationNavigator, Navigate,
    NavigationError, NavigationRecord, Panel, Row, TypeaheadError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed by the host or a previous call
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
