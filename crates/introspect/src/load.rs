//! Loading introspection responses from JSON text and files.

use crate::{IntrospectionError, IntrospectionResponse, Result};
use std::path::Path;

/// Parses an introspection response from JSON text.
///
/// Structural errors name the JSON path down to the offending type entry,
/// e.g. `data.__schema.types[2]`; the message names the key or value inside
/// that entry.
///
/// # Errors
///
/// Returns [`IntrospectionError::Json`] for text that is not valid JSON and
/// [`IntrospectionError::MissingStructure`] for valid JSON that lacks a key
/// the renderer needs (or holds it with the wrong shape).
pub fn parse_introspection(source: &str) -> Result<IntrospectionResponse> {
    let mut de = serde_json::Deserializer::from_str(source);
    let response = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        if inner.is_data() {
            IntrospectionError::MissingStructure {
                path,
                message: inner.to_string(),
            }
        } else {
            IntrospectionError::Json(inner)
        }
    })?;
    de.end().map_err(IntrospectionError::Json)?;
    Ok(response)
}

/// Reads and parses an introspection response from a file.
///
/// # Errors
///
/// Returns [`IntrospectionError::Io`] when the file cannot be read, and the
/// errors of [`parse_introspection`] otherwise.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_introspection_file(path: &Path) -> Result<IntrospectionResponse> {
    let source = std::fs::read_to_string(path).map_err(|source| IntrospectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = source.len(), "Read introspection file");
    parse_introspection(&source)
}
