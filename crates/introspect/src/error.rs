use crate::TypeKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Invalid introspection response at {path}: {message}")]
    MissingStructure { path: String, message: String },

    #[error("Malformed type reference: {kind} wrapper has no ofType")]
    MalformedTypeRef { kind: TypeKind },

    #[error("Malformed type reference: {kind} type has no name")]
    MissingTypeName { kind: TypeKind },

    #[error("Unsupported type kind {kind}")]
    UnsupportedKind { kind: String, name: Option<String> },
}
