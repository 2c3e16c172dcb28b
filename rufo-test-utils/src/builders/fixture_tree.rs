//! Temporary directory trees for finder tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a directory tree inside a fresh temporary directory
///
/// Entries are written in the order they were added. Paths are relative and
/// use `/` separators; missing parent directories are created.
#[derive(Debug, Default)]
pub struct FixtureTree {
    entries: Vec<Entry>,
}

#[derive(Debug)]
enum Entry {
    File { path: String, content: Vec<u8> },
    Dir { path: String },
}

impl FixtureTree {
    /// Create an empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with placeholder Ruby content
    pub fn file(self, path: &str) -> Self {
        self.file_with_content(path, b"puts :ok\n")
    }

    /// Add a file with specific content
    pub fn file_with_content(mut self, path: &str, content: &[u8]) -> Self {
        self.entries.push(Entry::File {
            path: path.to_string(),
            content: content.to_vec(),
        });
        self
    }

    /// Add an empty directory
    pub fn dir(mut self, path: &str) -> Self {
        self.entries.push(Entry::Dir {
            path: path.to_string(),
        });
        self
    }

    /// Write the tree into a new temporary directory
    pub fn build(self) -> io::Result<TempDir> {
        let root = TempDir::new()?;
        self.write_into(root.path())?;
        Ok(root)
    }

    /// Write the tree below an existing directory
    pub fn write_into(self, base: &Path) -> io::Result<()> {
        for entry in self.entries {
            match entry {
                Entry::File { path, content } => {
                    let target = join_relative(base, &path);
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&target, content)?;
                    log::trace!("Wrote fixture file {}", target.display());
                }
                Entry::Dir { path } => {
                    fs::create_dir_all(join_relative(base, &path))?;
                }
            }
        }
        Ok(())
    }
}

fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |path, part| path.join(part))
}
