//! Typeahead error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeaheadError {
    #[error("Field already registered: {0}")]
    DuplicateField(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid base URL: {0}")]
    InvalidBase(String),

    #[error("Invalid navigation path: {0}")]
    InvalidPath(String),
}
