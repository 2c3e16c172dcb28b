//! Test utilities for the rufo file finder
//!
//! This crate provides fixture tree builders, the canonical finder fixture
//! directories and small helpers for comparing resolved paths.

pub mod builders;
pub mod fixtures;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use builders::FixtureTree;
pub use fixtures::{FINDER_FIXTURES, finder_fixtures};

/// Install an env_logger for tests, honouring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// Strip `base` from every path and sort, for order-insensitive comparisons
///
/// Paths outside `base` are kept as they are. Separators are normalized to
/// `/` so expectations read the same on every platform.
pub fn relative_pairs<I>(pairs: I, base: &Path) -> Vec<(bool, String)>
where
    I: IntoIterator<Item = (bool, PathBuf)>,
{
    let mut relative: Vec<_> = pairs
        .into_iter()
        .map(|(exists, path)| {
            let shown = path.strip_prefix(base).unwrap_or(&path);
            (exists, shown.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    relative.sort();
    relative
}
