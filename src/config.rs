//! Configuration System
//!
//! Declarative configuration for the packager: scan roots, file suffix,
//! output template, root-name contract, and logging. Supports an optional
//! TOML config file; CLI flags take precedence over file values.

use crate::emit::Template;
use crate::error::PackError;
use crate::logging::LoggingConfig;
use crate::tree::builder::RootMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory scanned when no roots are given
pub const DEFAULT_ROOT: &str = "core-lib";

/// File-name suffix selecting core library sources
pub const DEFAULT_SUFFIX: &str = ".som";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Directories to scan
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// File-name suffix selecting core library sources
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Loader template (module or global)
    #[serde(default)]
    pub template: Template,

    /// Root-name contract for the emitted tree (keep or strip)
    #[serde(default)]
    pub root_mode: RootMode,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_ROOT)]
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            suffix: default_suffix(),
            template: Template::default(),
            root_mode: RootMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PackConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, PackError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PackError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&text).map_err(|e| {
            PackError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }
}
