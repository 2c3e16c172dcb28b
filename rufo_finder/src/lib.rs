//! File selection for the rufo Ruby formatter
//!
//! Turns the paths given on the command line into the files the formatter
//! should look at. Directories are walked recursively and filtered through
//! the default Ruby recognition plus user supplied include/exclude globs;
//! explicitly named files are always passed through, and missing paths are
//! reported with `exists == false` instead of failing.
//!
//! ```no_run
//! use rufo_finder::{FileFinder, FinderOptions};
//!
//! let options = FinderOptions::new().with_excludes(vec!["db/schema.rb".to_string()]);
//! for found in &FileFinder::new(["app", "Gemfile"], options) {
//!     let found = found?;
//!     if !found.exists {
//!         eprintln!("Error: file or directory not found: {}", found.path.display());
//!     }
//! }
//! # Ok::<(), rufo_finder::FinderError>(())
//! ```

pub mod error;
pub mod filter;
pub mod options;
pub mod recognition;
mod walker;

pub use error::{FinderError, Result};
pub use filter::{FileFilter, PatternMatcher, is_selected};
pub use options::FinderOptions;
pub use walker::{FileFinder, FoundFile, Resolve};
