//! Target resolution for the file finder
//!
//! Provides streaming resolution of file and directory targets using walkdir
//! with Ruby recognition and pattern filtering. Nothing is read from disk
//! until the caller advances the iterator.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::error::{FinderError, Result};
use crate::filter::FileFilter;
use crate::options::FinderOptions;
use crate::recognition::VENDOR_DIR;

/// A resolved candidate file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundFile {
    /// Whether the path existed when it was resolved
    pub exists: bool,
    /// Path in the same form as the target it came from
    pub path: PathBuf,
}

impl FoundFile {
    fn existing(path: PathBuf) -> Self {
        Self { exists: true, path }
    }

    fn missing(path: PathBuf) -> Self {
        Self {
            exists: false,
            path,
        }
    }

    /// Split into the `(exists, path)` pair
    pub fn into_pair(self) -> (bool, PathBuf) {
        (self.exists, self.path)
    }
}

impl From<FoundFile> for (bool, PathBuf) {
    fn from(found: FoundFile) -> Self {
        found.into_pair()
    }
}

/// Resolves targets into the files a formatter should consider
///
/// Explicit file targets are always returned as given. Directory targets are
/// walked recursively, skipping `vendor` directories, and only recognized
/// Ruby files or files matching an include pattern are returned, minus those
/// matching an exclude pattern.
#[derive(Debug, Clone)]
pub struct FileFinder {
    targets: Vec<PathBuf>,
    options: FinderOptions,
}

impl FileFinder {
    /// Create a finder over the given targets
    pub fn new<I, P>(targets: I, options: FinderOptions) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            options,
        }
    }

    /// Create a finder with include and exclude patterns
    pub fn with_patterns<I, P>(targets: I, includes: Vec<String>, excludes: Vec<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let options = FinderOptions::new()
            .with_includes(includes)
            .with_excludes(excludes);
        Self::new(targets, options)
    }

    /// Targets in the order they are resolved
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Options used for resolution
    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Start a fresh resolution of all targets
    pub fn resolve(&self) -> Resolve<'_> {
        Resolve {
            targets: self.targets.iter(),
            options: &self.options,
            filter: None,
            walk: None,
            seen: HashSet::new(),
        }
    }

    /// Resolve every target, stopping at the first error
    pub fn collect_files(&self) -> Result<Vec<FoundFile>> {
        self.resolve().collect()
    }
}

impl<'a> IntoIterator for &'a FileFinder {
    type Item = Result<FoundFile>;
    type IntoIter = Resolve<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.resolve()
    }
}

type EntryPredicate = fn(&DirEntry) -> bool;

/// Walk of a single directory target
struct DirectoryWalk {
    root: PathBuf,
    entries: FilterEntry<walkdir::IntoIter, EntryPredicate>,
}

impl DirectoryWalk {
    fn new(root: &Path, follow_links: bool) -> Self {
        let entries = WalkDir::new(root)
            .follow_links(follow_links)
            .into_iter()
            .filter_entry(keep_entry as EntryPredicate);

        Self {
            root: root.to_path_buf(),
            entries,
        }
    }
}

/// Prune `vendor` directories below the root before anything inside is read
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VENDOR_DIR {
        log::debug!("Skipping vendor directory {}", entry.path().display());
        return false;
    }
    true
}

/// Key used to recognize a file reached through different spellings
fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Lazy iterator over resolved files, created by [`FileFinder::resolve`]
pub struct Resolve<'a> {
    targets: std::slice::Iter<'a, PathBuf>,
    options: &'a FinderOptions,
    /// Compiled on the first directory target
    filter: Option<FileFilter>,
    walk: Option<DirectoryWalk>,
    /// Canonical forms of the paths already returned by this resolution
    seen: HashSet<PathBuf>,
}

impl Resolve<'_> {
    fn ensure_filter(&mut self) -> Result<()> {
        if self.filter.is_none() {
            let filter = FileFilter::new(&self.options.includes, &self.options.excludes)?;
            if !filter.has_patterns() {
                log::debug!("No include/exclude patterns, using default Ruby recognition");
            }
            self.filter = Some(filter);
        }
        Ok(())
    }

    /// Next selected file from the current directory walk, if any
    fn next_walked(&mut self) -> Option<Result<FoundFile>> {
        let walk = self.walk.as_mut()?;

        loop {
            let entry = match walk.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    log::warn!("Walk error under {}: {e}", walk.root.display());
                    return Some(Err(e.into()));
                }
                None => {
                    self.walk = None;
                    return None;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&walk.root).unwrap_or(entry.path());
            let selected = self
                .filter
                .as_ref()
                .is_some_and(|filter| filter.should_select(relative));

            if !selected {
                log::trace!("Rejected {}", entry.path().display());
                continue;
            }

            let path = entry.into_path();
            if !self.seen.insert(identity(&path)) {
                log::trace!("Already resolved {}", path.display());
                continue;
            }

            log::trace!("Selected {}", path.display());
            return Some(Ok(FoundFile::existing(path)));
        }
    }

    /// Resolve one target, starting a directory walk when needed
    ///
    /// Returns `None` once a walk has been started for a directory target.
    fn resolve_target(&mut self, target: &Path) -> Option<Result<FoundFile>> {
        let metadata = match fs::metadata(target) {
            Ok(metadata) => metadata,
            Err(e) if is_missing(&e) => {
                log::debug!("Target does not exist: {}", target.display());
                return Some(Ok(FoundFile::missing(target.to_path_buf())));
            }
            Err(source) => {
                return Some(Err(FinderError::Io {
                    path: target.to_path_buf(),
                    source,
                }));
            }
        };

        if !metadata.is_dir() {
            self.seen.insert(identity(target));
            return Some(Ok(FoundFile::existing(target.to_path_buf())));
        }

        if let Err(e) = self.ensure_filter() {
            log::warn!("Not walking {}: {e}", target.display());
            return Some(Err(e));
        }

        log::debug!("Walking directory {}", target.display());
        self.walk = Some(DirectoryWalk::new(target, self.options.follow_links));
        None
    }
}

impl Iterator for Resolve<'_> {
    type Item = Result<FoundFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(found) = self.next_walked() {
                return Some(found);
            }

            let target = self.targets.next()?;
            if let Some(found) = self.resolve_target(target) {
                return Some(found);
            }
        }
    }
}
