//! Atlas Sticky Header
//!
//! Pins the main menu to the top of the viewport when the pointer moves
//! near it, and releases it once the pointer moves well away:
//! ```text
//! Released
//!   ↓ pointer y <= pin_at
//! Pinned
//!   ↓ pointer y >= release_at (no open panel, not over a link/panel)
//! Released
//! ```
//! Between the two thresholds nothing changes.

mod error;
mod header;

pub use error::HeaderError;
pub use header::{
    HeaderPosition, HeaderStyle, HeaderThresholds, HeaderTransition, HoverTarget, PointerMove,
    StickyHeader,
};

pub type Result<T> = std::result::Result<T, HeaderError>;
