//! This module contains the configuration of the persistent store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The tree used when none is configured.
pub const DEFAULT_TREE_NAME: &str = "liquidstake";

/// The configuration of a [`SledStore`](super::SledStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SledConfig {
    path: PathBuf,

    #[serde(default = "default_tree_name")]
    tree_name: String,

    #[serde(default)]
    flush_on_commit: bool,
}

fn default_tree_name() -> String {
    DEFAULT_TREE_NAME.to_string()
}

impl SledConfig {
    /// Creates a configuration rooted at `path` with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tree_name: default_tree_name(),
            flush_on_commit: false,
        }
    }

    /// Sets the name of the tree records are stored in.
    pub fn with_tree_name(self, tree_name: impl Into<String>) -> Self {
        Self {
            tree_name: tree_name.into(),
            ..self
        }
    }

    /// Makes every commit wait until the batch is durable on disk.
    pub fn with_flush_on_commit(self, flush_on_commit: bool) -> Self {
        Self {
            flush_on_commit,
            ..self
        }
    }

    /// Returns the directory of the database.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the name of the tree records are stored in.
    pub fn tree_name(&self) -> &str {
        &self.tree_name
    }

    /// Returns whether commits are flushed to disk before returning.
    pub fn flush_on_commit(&self) -> bool {
        self.flush_on_commit
    }
}
