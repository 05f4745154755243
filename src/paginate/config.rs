//! Configuration for caption pagination

use serde::Deserialize;

/// How captions are distributed across slides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Maximum lines per slide; 0 disables pagination
    pub max_lines: usize,

    /// Drop trailing blank lines before counting
    pub trim_end: bool,
}

impl PaginationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of lines per slide
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Enable or disable trimming of trailing blank lines
    pub fn with_trim_end(mut self, trim_end: bool) -> Self {
        self.trim_end = trim_end;
        self
    }
}
