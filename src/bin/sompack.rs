//! Sompack CLI Binary
//!
//! Packages a SOM core library directory into a single generated
//! JavaScript line exposing `loadCoreLib()`.

use clap::Parser;
use sompack::cli::{self, Cli};
use sompack::config::PackConfig;
use sompack::emit;
use sompack::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Sompack starting");

    // Resolve effective configuration
    let config = match cli::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Scan, build, and render
    let line = match cli::run(&config) {
        Ok(line) => line,
        Err(e) => {
            error!("Packaging failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Emit exactly one line, to stdout or the requested file
    let written = match &cli.output {
        Some(path) => emit::write_to_file(path, &line),
        None => emit::write_line(&mut std::io::stdout().lock(), &line),
    };

    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }

    info!("Core library packaged");
}

/// Build logging configuration from CLI args and config file
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    // Config file first, if given
    let mut config = cli
        .config
        .as_ref()
        .and_then(|path| PackConfig::load_from_file(path).ok())
        .map(|c| c.logging)
        .unwrap_or_default();

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
