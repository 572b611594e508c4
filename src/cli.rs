//! CLI surface: clap definitions, config resolution, and the single
//! packaging operation (scan → build → render).

use crate::config::PackConfig;
use crate::emit::{self, Template};
use crate::error::PackError;
use crate::tree::builder::{RootMode, TreeBuilder};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Sompack CLI - package a SOM core library into a JavaScript loader
#[derive(Parser)]
#[command(name = "sompack")]
#[command(about = "Packages a SOM core library into an embeddable JavaScript loader")]
pub struct Cli {
    /// Directories to scan (default: core-lib)
    pub roots: Vec<PathBuf>,

    /// File-name suffix selecting core library sources (default: .som)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Output template (module or global)
    #[arg(long)]
    pub template: Option<String>,

    /// Merge root contents at the top level instead of keying by root basename
    #[arg(long)]
    pub strip_roots: bool,

    /// Write the generated line to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Resolve the effective configuration: defaults, then config file,
/// then CLI flags.
pub fn resolve_config(cli: &Cli) -> Result<PackConfig, PackError> {
    let mut config = match &cli.config {
        Some(path) => PackConfig::load_from_file(path)?,
        None => PackConfig::default(),
    };

    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    }
    if let Some(ref suffix) = cli.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(ref template) = cli.template {
        config.template = parse_template(template)?;
    }
    if cli.strip_roots {
        config.root_mode = RootMode::Strip;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }

    Ok(config)
}

fn parse_template(value: &str) -> Result<Template, PackError> {
    match value {
        "module" => Ok(Template::Module),
        "global" => Ok(Template::Global),
        other => Err(PackError::Config(format!(
            "Invalid template: {} (must be 'module' or 'global')",
            other
        ))),
    }
}

/// Execute the packaging pipeline and return the rendered loader line.
pub fn run(config: &PackConfig) -> Result<String, PackError> {
    let builder = TreeBuilder::new(config.roots.clone(), config.suffix.clone())
        .with_root_mode(config.root_mode);
    let tree = builder.build()?;

    let line = emit::render(&tree, config.template)?;
    info!(line_bytes = line.len(), "Loader statement rendered");

    Ok(line)
}
