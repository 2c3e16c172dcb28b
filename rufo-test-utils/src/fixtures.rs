//! Canonical fixture directories for finder tests

use std::io;
use tempfile::TempDir;

use crate::builders::FixtureTree;

/// Fixture directories and the files each one contains
pub const FINDER_FIXTURES: &[(&str, &[&str])] = &[
    ("only_ruby", &["a.rb"]),
    ("only_gemfiles", &["Gemfile", "a.gemspec"]),
    ("only_rake_files", &["Rakefile", "a.rake"]),
    ("only_vendor", &["vendor/a.rb"]),
    ("only_rackup_files", &["config.ru"]),
    ("only_erb_files", &["example.erb"]),
    ("mixed_dir", &["a.rb", "a.txt"]),
];

/// Build every fixture directory under one temporary root
///
/// Each fixture lives in its own subdirectory named after it, e.g.
/// `<root>/only_ruby/a.rb`.
pub fn finder_fixtures() -> io::Result<TempDir> {
    FINDER_FIXTURES
        .iter()
        .fold(FixtureTree::new(), |tree, (dir, files)| {
            files
                .iter()
                .fold(tree, |tree, file| tree.file(&format!("{dir}/{file}")))
        })
        .build()
}
