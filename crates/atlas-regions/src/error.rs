//! Region table error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed region table: {0}")]
    Parse(#[from] serde_json::Error),
}
