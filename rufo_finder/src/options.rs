//! Finder options
//!
//! The options are plain data so the formatter's configuration layer can
//! embed them. Locating and reading configuration files is left to the
//! caller; [`FinderOptions::from_figment`] only extracts from a `Figment`
//! the caller has already assembled.

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for file resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderOptions {
    /// Patterns selecting files beyond the default Ruby recognition
    pub includes: Vec<String>,
    /// Patterns removing files from the selection (override everything)
    pub excludes: Vec<String>,
    /// Follow symbolic links below each directory target
    pub follow_links: bool,
}

impl FinderOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set include patterns
    pub fn with_includes(mut self, patterns: Vec<String>) -> Self {
        self.includes = patterns;
        self
    }

    /// Set exclude patterns
    pub fn with_excludes(mut self, patterns: Vec<String>) -> Self {
        self.excludes = patterns;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Extract options from the top level of a caller-built figment
    ///
    /// Missing keys keep their defaults.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let options: Self = figment.extract()?;
        log::debug!(
            "Finder options: includes={:?} excludes={:?} follow_links={}",
            options.includes,
            options.excludes,
            options.follow_links
        );
        Ok(options)
    }
}
