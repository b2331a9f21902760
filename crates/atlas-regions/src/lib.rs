//! Atlas Reference Regions
//!
//! The fixed, ordered table of `(code, label)` pairs the search box matches
//! against: continents, countries, and first-level subdivisions.
//! Codes of subdivisions carry their parent scope before a `/` (`US/FL`).

mod dataset;
mod entry;
mod error;

pub use dataset::Dataset;
pub use entry::{Entry, EntryKind};
pub use error::RegionError;

pub type Result<T> = std::result::Result<T, RegionError>;
