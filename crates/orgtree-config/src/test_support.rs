//! Scratch directory trees for config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree that config files can be dropped into.
pub struct Scratch {
    /// Removed on drop.
    root: TempDir,
}

impl Scratch {
    /// Creates an empty scratch tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the scratch root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) below the root. An empty `rel` is the root itself.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `.orgtree.toml` into `rel` with the given contents.
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a config that only sets the leader threshold.
    pub fn threshold_config(&self, rel: &str, threshold: u32) -> PathBuf {
        self.config(rel, &format!("[display]\nleader_threshold = {threshold}\n"))
    }
}
