//! Filesystem walker for collecting core library source files

use crate::error::PackError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Filesystem walker
///
/// Collects every file under the root whose name ends with the configured
/// suffix. The match is literal and case-sensitive; everything else
/// (hidden files, other extensions, directories) is silently skipped.
pub struct Walker {
    root: PathBuf,
    suffix: String,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path and file-name suffix
    pub fn new(root: PathBuf, suffix: String) -> Self {
        Self {
            root,
            suffix,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, suffix: String, config: WalkerConfig) -> Self {
        Self {
            root,
            suffix,
            config,
        }
    }

    /// Walk the filesystem and collect matching file paths
    ///
    /// Returns paths sorted for determinism. Fails if the root does not
    /// exist, is not a directory, or any entry cannot be read.
    pub fn walk(&self) -> Result<Vec<PathBuf>, PackError> {
        let metadata = std::fs::metadata(&self.root)
            .map_err(|e| PackError::filesystem(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(PackError::NotADirectory(self.root.clone()));
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
                });
                PackError::filesystem(path, source)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = entry
                .file_name()
                .to_string_lossy()
                .ends_with(&self.suffix);
            if matches {
                files.push(entry.into_path());
            }
        }

        // Sort paths for determinism
        files.sort();

        Ok(files)
    }
}
