//! GraphQL introspection to SDL conversion.
//!
//! This crate reads the JSON response of a GraphQL introspection query and
//! renders the schema it describes as Schema Definition Language (SDL).
//!
//! # Examples
//!
//! ## One-step file to SDL
//!
//! ```no_run
//! use graphql_introspect::file_to_sdl;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdl = file_to_sdl(Path::new("introspection.json"))?;
//!     print!("{sdl}");
//!     Ok(())
//! }
//! ```
//!
//! ## Step-by-step usage
//!
//! ```
//! use graphql_introspect::{parse_introspection, render_schema};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let response = parse_introspection(
//!     r#"{"data": {"__schema": {"types": [
//!         {"kind": "OBJECT", "name": "__Schema", "fields": []},
//!         {"kind": "UNION", "name": "SearchResult",
//!          "possibleTypes": [{"name": "Post"}, {"name": "Comment"}]}
//!     ]}}}"#,
//! )?;
//!
//! let blocks = render_schema(&response)?;
//! assert_eq!(blocks, vec![vec!["union SearchResult = Post | Comment".to_string()]]);
//! # Ok(())
//! # }
//! ```

mod error;
mod load;
mod sdl;
mod types;

pub use error::{IntrospectionError, Result};
pub use load::{load_introspection_file, parse_introspection};
pub use sdl::{introspection_to_sdl, render_schema, render_type};
pub use types::*;

use std::path::Path;

/// Loads an introspection JSON file and converts it to SDL.
///
/// This is a convenience function that combines [`load_introspection_file`]
/// and [`introspection_to_sdl`] into a single call.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not valid JSON
/// - The document lacks the expected introspection structure
/// - A field type reference is malformed
pub fn file_to_sdl(path: &Path) -> Result<String> {
    let introspection = load_introspection_file(path)?;
    introspection_to_sdl(&introspection)
}
