//! Settings file support
//!
//! Settings bundle the pagination defaults and an optional record of
//! placeholder values. They are read from TOML:
//!
//! ```toml
//! [pagination]
//! max_lines = 4
//! trim_end = true
//!
//! [data]
//! title = "Amazing Grace"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::paginate::PaginationConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pagination: PaginationConfig,
    /// Placeholder values: name -> plain text
    pub data: HashMap<String, String>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the pagination section, keeping everything else
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }
}
