//! Default Ruby file recognition
//!
//! Identifies the files a Ruby formatter cares about when walking a
//! directory without any include patterns: sources, rake files, gem
//! manifests, rackup files and templates.

use std::path::Path;

/// Extensions recognized as Ruby sources or templates
pub const DEFAULT_RUBY_EXTENSIONS: &[&str] = &["rb", "rake", "gemspec", "ru", "erb", "jbuilder"];

/// Rake's own list of rakefile names
pub const RAKEFILE_NAMES: &[&str] = &["Rakefile", "rakefile", "Rakefile.rb", "rakefile.rb"];

/// Files recognized by exact name
pub const DEFAULT_RUBY_FILENAMES: &[&str] = &["Gemfile", "config.ru"];

/// Name of the directory skipped during every walk
pub const VENDOR_DIR: &str = "vendor";

/// Check whether a file name is recognized as Ruby without configuration
pub fn is_ruby_file_name(name: &str) -> bool {
    if DEFAULT_RUBY_FILENAMES.contains(&name) || RAKEFILE_NAMES.contains(&name) {
        return true;
    }

    // `.rb` alone is a dotfile, not an extension
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => DEFAULT_RUBY_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Check whether a path's final component is recognized as Ruby
pub fn is_ruby_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_ruby_file_name)
}
