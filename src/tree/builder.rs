//! Tree builder for constructing the core library mapping

use crate::error::PackError;
use crate::tree::node::{self, LibraryTree};
use crate::tree::walker::{Walker, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Contract for the emitted tree's top-level keys.
///
/// `Keep` nests each root's files under the root's basename, which is what
/// the downstream consumer indexes by (e.g. `tree["core-lib"]`). `Strip`
/// merges the roots' contents directly at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMode {
    /// Top-level keys are the scanned roots' basenames (default)
    #[default]
    Keep,
    /// Root contents are merged at the top level; later roots win on
    /// conflicting paths
    Strip,
}

/// Tree builder for constructing the core library mapping
pub struct TreeBuilder {
    roots: Vec<PathBuf>,
    suffix: String,
    root_mode: RootMode,
    walker_config: Option<WalkerConfig>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given roots and file-name suffix
    pub fn new(roots: Vec<PathBuf>, suffix: String) -> Self {
        Self {
            roots,
            suffix,
            root_mode: RootMode::default(),
            walker_config: None,
        }
    }

    /// Set the root-name contract for the emitted tree
    pub fn with_root_mode(mut self, root_mode: RootMode) -> Self {
        self.root_mode = root_mode;
        self
    }

    /// Set walker config (symlink following, max depth). When set, the
    /// walker uses this config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Build the complete library tree from the filesystem
    ///
    /// Roots are processed in the order given; within a root the walker
    /// yields files in sorted order. Any missing root, unreadable file, or
    /// non-text file aborts the build with no partial result.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<LibraryTree, PackError> {
        let start = Instant::now();
        info!("Starting core library scan");

        let mut tree = LibraryTree::new();

        for root in &self.roots {
            self.scan_root(root, &mut tree)?;
        }

        let duration = start.elapsed();
        info!(
            leaf_count = node::leaf_count(&tree),
            duration_ms = duration.as_millis(),
            "Core library tree built"
        );

        Ok(tree)
    }

    /// Scan one root and insert its matching files into the tree
    fn scan_root(&self, root: &Path, tree: &mut LibraryTree) -> Result<(), PackError> {
        let walker = match &self.walker_config {
            Some(config) => {
                Walker::with_config(root.to_path_buf(), self.suffix.clone(), config.clone())
            }
            None => Walker::new(root.to_path_buf(), self.suffix.clone()),
        };

        let files = match walker.walk() {
            Ok(f) => {
                debug!(root = %root.display(), file_count = f.len(), "Walked root");
                f
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        for file_path in files {
            let segments = self.path_segments(root, &file_path);
            let content = read_text(&file_path)?;
            node::insert(tree, &segments, content);
        }

        Ok(())
    }

    /// Split a file path into tree segments relative to its root,
    /// prepending the root's basename in `Keep` mode.
    fn path_segments(&self, root: &Path, file_path: &Path) -> Vec<String> {
        let relative = file_path.strip_prefix(root).unwrap_or(file_path);

        let mut segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if self.root_mode == RootMode::Keep {
            // Roots like "." or "/" have no basename and contribute no
            // top-level segment.
            if let Some(base) = root.file_name() {
                segments.insert(0, base.to_string_lossy().into_owned());
            }
        }

        segments
    }
}

/// Read a file fully as UTF-8 text.
///
/// A read failure is a filesystem error; bytes that are not valid UTF-8
/// are a defined serialization failure (leaves must be text).
fn read_text(path: &Path) -> Result<String, PackError> {
    let bytes = std::fs::read(path).map_err(|e| {
        error!("Failed to read file {:?}: {}", path, e);
        PackError::filesystem(path, e)
    })?;

    String::from_utf8(bytes).map_err(|_| PackError::NotText(path.to_path_buf()))
}
