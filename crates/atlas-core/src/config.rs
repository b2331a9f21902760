//! Page configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use atlas_header::HeaderThresholds;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin that selection redirects resolve against
    pub base_url: String,
    /// External region table; the bundled one when unset
    pub dataset_path: Option<PathBuf>,
    /// Ids of the inputs that get autocomplete
    pub search_fields: Vec<String>,
    /// Sticky header pointer thresholds
    pub header: HeaderThresholds,
    /// Default log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.base_url)
            .map_err(|e| CoreError::Config(format!("base_url {}: {}", self.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "base_url {} cannot carry a path",
                self.base_url
            )));
        }

        if let Some(id) = self.search_fields.iter().find(|id| id.trim().is_empty()) {
            return Err(CoreError::Config(format!("blank search field id {:?}", id)));
        }

        self.header.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_string(),
            dataset_path: None,
            search_fields: vec!["SearchBox".to_string()],
            header: HeaderThresholds::default(),
            log_filter: "info".to_string(),
        }
    }
}
