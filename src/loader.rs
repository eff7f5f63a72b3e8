//! SBOM loading and component indexing.
//!
//! This module reads a CycloneDX-style JSON document and builds a
//! [`ComponentIndex`] of its Maven library components. Field access is
//! best-effort: individual entries with missing or malformed fields are
//! skipped or stored with `None` values, but a document without a
//! `components` array is a fatal error.
//!
//! # Examples
//!
//! ```no_run
//! use sbomcmp::loader::load_components;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let index = load_components(Path::new("bom.json"))?;
//! println!("{} Maven libraries", index.len());
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::model::{Component, ComponentIndex};
use std::fs;
use std::path::Path;

/// Loads an SBOM file and builds its component index.
///
/// The file must contain a JSON object with a top-level `components`
/// array. For each entry with `type` equal to `"library"` and a purl
/// containing `"maven"`, the entry's `name -> version` pair is recorded.
/// Everything else is ignored silently.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The file contains invalid JSON (`ParseError::JsonError`)
/// - The document has no `components` array (`ParseError::MissingComponents`)
pub fn load_components(path: &Path) -> Result<ComponentIndex, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    parse_components(&content)
        .map_err(|e| rewrap_with_path(e, path.to_string_lossy().to_string()))
}

/// Parses SBOM content into a component index.
///
/// Same contract as [`load_components`], but operating on an in-memory
/// string. Errors carry an empty path; `load_components` fills it in.
pub fn parse_components(content: &str) -> Result<ComponentIndex, ParseError> {
    let document: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ParseError::json_error("", e))?;

    let components = document
        .get("components")
        .and_then(|c| c.as_array())
        .ok_or_else(|| ParseError::missing_components(""))?;

    let mut index = ComponentIndex::new();
    for entry in components {
        // Non-object entries and entries with non-string fields are
        // best-effort skipped rather than failing the whole document.
        let Ok(component) = serde_json::from_value::<Component>(entry.clone()) else {
            continue;
        };
        if component.is_maven_library() {
            index.insert(component.name, component.version);
        }
    }

    Ok(index)
}

fn rewrap_with_path(err: ParseError, path: String) -> ParseError {
    match err {
        ParseError::JsonError { source, .. } => ParseError::json_error(path, source),
        ParseError::MissingComponents { .. } => ParseError::missing_components(path),
        other => other,
    }
}
