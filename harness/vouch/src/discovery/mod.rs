//! Test module discovery.
//!
//! Walks a directory tree in sorted order and selects every file whose name
//! ends with the test suffix. Directories named `node_modules` are not
//! entered.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::loader::LoadError;
use crate::result::LoadFailure;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// A discovered test module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFile {
    /// Path to the test file.
    pub path: PathBuf,
    /// File name with the test suffix removed.
    pub module: String,
}

impl TestFile {
    pub fn new(path: PathBuf, module: String) -> Self {
        TestFile { path, module }
    }

    /// Build a `TestFile` if `path`'s file name ends with `suffix`.
    pub fn from_path(path: &Path, suffix: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let module = file_name.strip_suffix(suffix)?;
        Some(TestFile::new(path.to_path_buf(), module.to_string()))
    }
}

/// Everything found under a root.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Test files in walk order.
    pub files: Vec<TestFile>,
    /// Entries that could not be read.
    pub errors: Vec<LoadFailure>,
}

/// Discover every test file under `root`.
///
/// If `root` is itself a file it is selected when its name carries the
/// suffix.
pub fn discover_tests(root: &Path, suffix: &str) -> Discovery {
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Some(file) = TestFile::from_path(entry.path(), suffix) {
                    debug!(path = %file.path.display(), module = %file.module, "discovered");
                    discovery.files.push(file);
                }
            }
            Err(error) => {
                let path = error
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                tracing::warn!(path = %path.display(), %error, "cannot read directory entry");
                discovery
                    .errors
                    .push(LoadFailure::new(path, LoadError::Walk(error)));
            }
        }
    }

    discovery
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
