//! Exit codes for the introspection-to-SDL CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use graphql_introspect::IntrospectionError;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures. Code 2 is
/// left to clap for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - SDL written
    Success = 0,
    /// Schema error (missing introspection structure, malformed type reference)
    SchemaError = 3,
    /// I/O error (file not found or unreadable, stdout write failure)
    IoError = 4,
    /// Parse error (input is not valid JSON)
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Classify an error chain by the first [`IntrospectionError`] it contains.
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(err) = cause.downcast_ref::<IntrospectionError>() {
                return Self::from(err);
            }
            if cause.is::<std::io::Error>() {
                return Self::IoError;
            }
        }
        Self::SchemaError
    }
}

impl From<&IntrospectionError> for ExitCode {
    fn from(error: &IntrospectionError) -> Self {
        match error {
            IntrospectionError::Io { .. } => Self::IoError,
            IntrospectionError::Json(_) => Self::ParseError,
            IntrospectionError::MissingStructure { .. }
            | IntrospectionError::MalformedTypeRef { .. }
            | IntrospectionError::MissingTypeName { .. }
            | IntrospectionError::UnsupportedKind { .. } => Self::SchemaError,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::SchemaError => write!(f, "schema error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}
