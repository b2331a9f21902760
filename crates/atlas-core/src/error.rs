//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Region table error: {0}")]
    Region(#[from] atlas_regions::RegionError),

    #[error("Typeahead error: {0}")]
    Typeahead(#[from] atlas_typeahead::TypeaheadError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] atlas_typeahead::NavigationError),

    #[error("Header error: {0}")]
    Header(#[from] atlas_header::HeaderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
