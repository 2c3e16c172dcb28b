//! File selection using glob patterns
//!
//! Provides efficient pattern matching using GlobSet for include/exclude
//! filtering on top of the default Ruby recognition.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

use crate::error::{FinderError, Result};
use crate::recognition::is_ruby_file;

/// Pattern matcher using GlobSet for efficient matching
///
/// Patterns without a separator are matched against the file name only.
/// Patterns with a separator are matched against the path relative to the
/// directory being walked. In both cases `*` stops at `/`.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    /// Patterns matched against the file name
    name_globs: GlobSet,
    /// Patterns matched against the relative path
    path_globs: GlobSet,
    /// Original patterns for debugging
    patterns: Vec<String>,
}

impl PatternMatcher {
    /// Create a new pattern matcher from glob patterns
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut names = GlobSetBuilder::new();
        let mut paths = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| FinderError::InvalidPattern(format!("{pattern}: {e}")))?;

            if pattern.contains('/') {
                paths.add(glob);
            } else {
                names.add(glob);
            }
        }

        let name_globs = names
            .build()
            .map_err(|e| FinderError::InvalidPattern(e.to_string()))?;
        let path_globs = paths
            .build()
            .map_err(|e| FinderError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            name_globs,
            path_globs,
            patterns: patterns.to_vec(),
        })
    }

    /// Check if a relative path matches any of the patterns
    pub fn matches(&self, relative: &Path) -> bool {
        let by_name = relative
            .file_name()
            .is_some_and(|name| self.name_globs.is_match(name));

        by_name || self.path_globs.is_match(relative)
    }

    /// Get the original patterns
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// File filter combining default recognition with include and exclude patterns
#[derive(Debug, Clone)]
pub struct FileFilter {
    /// Include patterns matcher (adds to default recognition)
    include_matcher: Option<PatternMatcher>,
    /// Exclude patterns matcher (overrides everything)
    exclude_matcher: Option<PatternMatcher>,
}

impl FileFilter {
    /// Create a new file filter
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let include_matcher = if !include_patterns.is_empty() {
            Some(PatternMatcher::new(include_patterns)?)
        } else {
            None
        };

        let exclude_matcher = if !exclude_patterns.is_empty() {
            Some(PatternMatcher::new(exclude_patterns)?)
        } else {
            None
        };

        Ok(Self {
            include_matcher,
            exclude_matcher,
        })
    }

    /// Check if a file found while walking a directory should be selected
    ///
    /// `relative` is the file's path relative to the walked directory.
    ///
    /// Rules:
    /// 1. If path matches exclude patterns -> false (exclude overrides)
    /// 2. If the file is recognized as Ruby -> true
    /// 3. If path matches include patterns -> true
    /// 4. Otherwise -> false
    pub fn should_select(&self, relative: &Path) -> bool {
        if let Some(ref exclude) = self.exclude_matcher
            && exclude.matches(relative)
        {
            return false;
        }

        if is_ruby_file(relative) {
            return true;
        }

        self.include_matcher
            .as_ref()
            .is_some_and(|include| include.matches(relative))
    }

    /// Check if the filter has any patterns configured
    pub fn has_patterns(&self) -> bool {
        self.include_matcher.is_some() || self.exclude_matcher.is_some()
    }
}

/// Decide whether a relative path is selected under the given patterns
///
/// The selection rule as a single pure function, for callers checking one
/// path. It compiles the patterns on every call; anything testing many
/// paths should build a [`FileFilter`] once and use
/// [`FileFilter::should_select`].
pub fn is_selected(relative: &Path, includes: &[String], excludes: &[String]) -> Result<bool> {
    Ok(FileFilter::new(includes, excludes)?.should_select(relative))
}
