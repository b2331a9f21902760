//! Sticky header state machine

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::HeaderError;
use crate::Result;

/// Pointer heights, in CSS pixels from the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderThresholds {
    /// Pin once the pointer is at or above this height
    pub pin_at: f64,
    /// Release once the pointer is at or below this height
    pub release_at: f64,
}

impl HeaderThresholds {
    pub fn new(pin_at: f64, release_at: f64) -> Result<Self> {
        let thresholds = Self { pin_at, release_at };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        match self.pin_at.partial_cmp(&self.release_at) {
            Some(Ordering::Less) => Ok(()),
            _ => Err(HeaderError::InvalidThresholds {
                pin_at: self.pin_at,
                release_at: self.release_at,
            }),
        }
    }
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            pin_at: 70.0,
            release_at: 150.0,
        }
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverTarget {
    Link,
    Panel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerMove {
    pub y: f64,
    pub target: HoverTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    Fixed,
    Relative,
}

impl std::fmt::Display for HeaderPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderPosition::Fixed => write!(f, "fixed"),
            HeaderPosition::Relative => write!(f, "relative"),
        }
    }
}

/// Style to apply to the header and the page body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub position: HeaderPosition,
    pub top_px: f64,
    pub width_percent: f64,
    /// Top padding of the body, keeps content from jumping under a pinned header
    pub body_padding_top_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeaderTransition {
    Pinned(HeaderStyle),
    Released(HeaderStyle),
}

impl HeaderTransition {
    pub fn style(&self) -> &HeaderStyle {
        match self {
            HeaderTransition::Pinned(style) | HeaderTransition::Released(style) => style,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StickyHeader {
    thresholds: HeaderThresholds,
    fixed: bool,
    header_height: f64,
}

impl StickyHeader {
    pub fn new(thresholds: HeaderThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            fixed: false,
            header_height: 0.0,
        })
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn thresholds(&self) -> HeaderThresholds {
        self.thresholds
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Rendered height of the header, reported by the host.
    pub fn set_header_height(&mut self, px: f64) {
        self.header_height = px.max(0.0);
    }

    /// Feed a pointer move. Returns the style change to apply, if any.
    pub fn on_pointer_move(&mut self, event: PointerMove, panel_open: bool) -> Option<HeaderTransition> {
        if event.y <= self.thresholds.pin_at {
            if self.fixed {
                return None;
            }
            self.fixed = true;
            tracing::debug!(y = event.y, padding = self.header_height, "Header pinned");
            return Some(HeaderTransition::Pinned(HeaderStyle {
                position: HeaderPosition::Fixed,
                top_px: 0.0,
                width_percent: 100.0,
                body_padding_top_px: self.header_height,
            }));
        }

        if event.y >= self.thresholds.release_at {
            if panel_open || !self.fixed || event.target != HoverTarget::Other {
                return None;
            }
            self.fixed = false;
            tracing::debug!(y = event.y, "Header released");
            return Some(HeaderTransition::Released(HeaderStyle {
                position: HeaderPosition::Relative,
                top_px: 0.0,
                width_percent: 100.0,
                body_padding_top_px: 0.0,
            }));
        }

        None
    }
}

impl Default for StickyHeader {
    fn default() -> Self {
        Self {
            thresholds: HeaderThresholds::default(),
            fixed: false,
            header_height: 0.0,
        }
    }
}
