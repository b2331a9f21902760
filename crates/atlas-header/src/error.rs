//! Header error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeaderError {
    #[error("Invalid thresholds: pin at {pin_at}px must be above release at {release_at}px")]
    InvalidThresholds { pin_at: f64, release_at: f64 },
}
