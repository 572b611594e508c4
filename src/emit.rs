//! Output rendering: JSON serialization and the loader templates
//!
//! The tree is embedded as compact JSON inside one of two fixed JavaScript
//! statements, so the consuming runtime can obtain the whole core library
//! from a single `loadCoreLib()` call with no filesystem access.

use crate::error::PackError;
use crate::tree::node::LibraryTree;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Loader statement shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// CommonJS module attachment: `exports.loadCoreLib = ...` (default)
    #[default]
    Module,
    /// Browser global attachment under strict mode:
    /// `'use strict'; window.loadCoreLib = ...`
    Global,
}

/// Render the tree as a single loader statement.
///
/// The embedded payload is compact single-line JSON; string leaves carry
/// standard JSON escaping, so the consumer can deserialize the payload
/// directly.
pub fn render(tree: &LibraryTree, template: Template) -> Result<String, PackError> {
    let json = serde_json::to_string(tree)?;
    debug!(template = ?template, json_bytes = json.len(), "Rendered library tree");

    let line = match template {
        Template::Module => format!(
            "exports.loadCoreLib = function () {{ return {}; }};",
            json
        ),
        Template::Global => format!(
            "'use strict'; window.loadCoreLib = function () {{ return {}; }};",
            json
        ),
    };

    Ok(line)
}

/// Write the rendered statement as a single newline-terminated line.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<(), PackError> {
    writeln!(writer, "{}", line).map_err(PackError::Io)?;
    writer.flush().map_err(PackError::Io)
}

/// Write the rendered statement to a file instead of stdout.
pub fn write_to_file(path: &Path, line: &str) -> Result<(), PackError> {
    let mut file = std::fs::File::create(path).map_err(PackError::Io)?;
    write_line(&mut file, line)
}
