//! SDL (Schema Definition Language) conversion from introspection responses.

use crate::types::{Field, InputValue, IntrospectionResponse, IntrospectionType};
use crate::{IntrospectionError, Result};

/// Indentation for members inside a `{ ... }` block.
const INDENT: &str = "  ";

/// Converts a GraphQL introspection response to SDL (Schema Definition Language).
///
/// Types are emitted in document order, one block per type, with a blank line
/// between blocks and a single trailing newline. Types whose name starts with
/// `__` are skipped, as are entries of an unsupported kind.
///
/// # Errors
///
/// Returns an error when a type reference is malformed; see [`render_type`].
///
/// # Examples
///
/// ```
/// # use graphql_introspect::{introspection_to_sdl, parse_introspection};
/// let response = parse_introspection(
///     r#"{"data": {"__schema": {"types": [{"kind": "SCALAR", "name": "Date"}]}}}"#,
/// )?;
/// assert_eq!(introspection_to_sdl(&response)?, "scalar Date\n");
/// # Ok::<(), graphql_introspect::IntrospectionError>(())
/// ```
pub fn introspection_to_sdl(introspection: &IntrospectionResponse) -> Result<String> {
    let blocks = render_schema(introspection)?;
    if blocks.is_empty() {
        return Ok(String::new());
    }

    let mut sdl = blocks
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    sdl.push('\n');
    Ok(sdl)
}

/// Renders every non-meta type of the schema, in document order.
///
/// Each element is the list of lines of one type block.
///
/// # Errors
///
/// Propagates the first error from [`render_type`] other than
/// [`IntrospectionError::UnsupportedKind`], which is logged and skipped.
#[tracing::instrument(skip(introspection), fields(types = introspection.data.schema.types.len()))]
pub fn render_schema(introspection: &IntrospectionResponse) -> Result<Vec<Vec<String>>> {
    tracing::debug!("Converting introspection to SDL");
    let mut blocks = Vec::new();
    let mut meta_types_skipped = 0;

    for (index, type_def) in introspection.data.schema.types.iter().enumerate() {
        if type_def.is_meta_type() {
            meta_types_skipped += 1;
            continue;
        }

        match render_type(type_def) {
            Ok(lines) => blocks.push(lines),
            Err(IntrospectionError::UnsupportedKind { kind, name }) => {
                tracing::warn!(index, %kind, ?name, "Skipping type with unsupported kind");
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        types_written = blocks.len(),
        meta_types_skipped,
        "SDL generation complete"
    );
    Ok(blocks)
}

/// Renders a single type as SDL lines, without trailing newlines.
///
/// Fields, enum values and union members keep their document order.
///
/// # Errors
///
/// Returns [`IntrospectionError::UnsupportedKind`] for
/// [`IntrospectionType::Unsupported`] entries, and the type-reference errors of
/// [`crate::TypeRef::to_type_string`] for malformed field types.
pub fn render_type(type_def: &IntrospectionType) -> Result<Vec<String>> {
    match type_def {
        IntrospectionType::Scalar(t) => Ok(vec![format!("scalar {}", t.name)]),
        IntrospectionType::Object(t) => field_block("type", &t.name, &t.fields),
        IntrospectionType::Interface(t) => field_block("interface", &t.name, &t.fields),
        IntrospectionType::Union(t) => {
            let members = t
                .possible_types
                .iter()
                .map(|member| member.name.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            Ok(vec![format!("union {} = {members}", t.name)])
        }
        IntrospectionType::Enum(t) => {
            let mut lines = Vec::with_capacity(t.enum_values.len() + 2);
            lines.push(format!("enum {} {{", t.name));
            lines.extend(t.enum_values.iter().map(|v| format!("{INDENT}{}", v.name)));
            lines.push("}".to_string());
            Ok(lines)
        }
        IntrospectionType::InputObject(t) => input_block(&t.name, &t.input_fields),
        IntrospectionType::Unsupported(t) => Err(IntrospectionError::UnsupportedKind {
            kind: t.kind.clone(),
            name: t.name.clone(),
        }),
    }
}

fn field_block(keyword: &str, name: &str, fields: &[Field]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(fields.len() + 2);
    lines.push(format!("{keyword} {name} {{"));
    for field in fields {
        lines.push(member_line(&field.name, &field.type_ref.to_type_string()?));
    }
    lines.push("}".to_string());
    Ok(lines)
}

fn input_block(name: &str, input_fields: &[InputValue]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(input_fields.len() + 2);
    lines.push(format!("input {name} {{"));
    for field in input_fields {
        lines.push(member_line(&field.name, &field.type_ref.to_type_string()?));
    }
    lines.push("}".to_string());
    Ok(lines)
}

fn member_line(name: &str, type_string: &str) -> String {
    format!("{INDENT}{name}: {type_string}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EnumType, EnumValue, InputObjectType, InterfaceType, NamedTypeRef, ObjectType,
        ScalarType, TypeKind, TypeRef, UnionType, UnsupportedType,
    };

    fn field(name: &str, type_ref: TypeRef) -> Field {
        Field {
            name: name.to_string(),
            type_ref,
        }
    }

    fn scalar(name: &str) -> TypeRef {
        TypeRef::named(TypeKind::Scalar, name)
    }

    #[test]
    fn test_object_type() {
        let user = IntrospectionType::Object(ObjectType {
            name: "User".to_string(),
            fields: vec![
                field("id", TypeRef::non_null(scalar("ID"))),
                field("name", scalar("String")),
            ],
        });
        assert_eq!(
            render_type(&user).unwrap().join("\n"),
            "type User {\n  id: ID!\n  name: String\n}"
        );
    }

    #[test]
    fn test_interface_type() {
        let node = IntrospectionType::Interface(InterfaceType {
            name: "Node".to_string(),
            fields: vec![field("id", TypeRef::non_null(scalar("ID")))],
        });
        assert_eq!(
            render_type(&node).unwrap(),
            vec!["interface Node {", "  id: ID!", "}"]
        );
    }

    #[test]
    fn test_object_without_fields() {
        let empty = IntrospectionType::Object(ObjectType {
            name: "Empty".to_string(),
            fields: Vec::new(),
        });
        assert_eq!(render_type(&empty).unwrap(), vec!["type Empty {", "}"]);
    }

    #[test]
    fn test_scalar_type() {
        let date = IntrospectionType::Scalar(ScalarType {
            name: "DateTime".to_string(),
        });
        assert_eq!(render_type(&date).unwrap(), vec!["scalar DateTime"]);
    }

    #[test]
    fn test_union_type() {
        let search = IntrospectionType::Union(UnionType {
            name: "SearchResult".to_string(),
            possible_types: vec![
                NamedTypeRef {
                    name: "Post".to_string(),
                },
                NamedTypeRef {
                    name: "Comment".to_string(),
                },
            ],
        });
        assert_eq!(
            render_type(&search).unwrap(),
            vec!["union SearchResult = Post | Comment"]
        );
    }

    #[test]
    fn test_enum_keeps_document_order() {
        let role = IntrospectionType::Enum(EnumType {
            name: "Role".to_string(),
            enum_values: ["VIEWER", "ADMIN", "EDITOR"]
                .into_iter()
                .map(|name| EnumValue {
                    name: name.to_string(),
                })
                .collect(),
        });
        assert_eq!(
            render_type(&role).unwrap(),
            vec!["enum Role {", "  VIEWER", "  ADMIN", "  EDITOR", "}"]
        );
    }

    #[test]
    fn test_input_object_type() {
        let filter = IntrospectionType::InputObject(InputObjectType {
            name: "PostFilter".to_string(),
            input_fields: vec![
                InputValue {
                    name: "tags".to_string(),
                    type_ref: TypeRef::list(TypeRef::non_null(scalar("String"))),
                },
                InputValue {
                    name: "author".to_string(),
                    type_ref: TypeRef::named(TypeKind::InputObject, "AuthorFilter"),
                },
            ],
        });
        assert_eq!(
            render_type(&filter).unwrap(),
            vec![
                "input PostFilter {",
                "  tags: [String!]",
                "  author: AuthorFilter",
                "}"
            ]
        );
    }

    #[test]
    fn test_unsupported_kind() {
        let future = IntrospectionType::Unsupported(UnsupportedType {
            kind: "DIRECTIVE_SET".to_string(),
            name: Some("Future".to_string()),
        });
        match render_type(&future) {
            Err(IntrospectionError::UnsupportedKind { kind, name }) => {
                assert_eq!(kind, "DIRECTIVE_SET");
                assert_eq!(name.as_deref(), Some("Future"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_field_type_fails_block() {
        let broken = IntrospectionType::Object(ObjectType {
            name: "Broken".to_string(),
            fields: vec![field(
                "items",
                TypeRef {
                    kind: TypeKind::List,
                    name: None,
                    of_type: None,
                },
            )],
        });
        assert!(matches!(
            render_type(&broken),
            Err(IntrospectionError::MalformedTypeRef { .. })
        ));
    }

    #[test]
    fn test_meta_type_field_references_are_kept() {
        let query = IntrospectionType::Object(ObjectType {
            name: "Query".to_string(),
            fields: vec![field(
                "schema",
                TypeRef::non_null(TypeRef::named(TypeKind::Object, "__Schema")),
            )],
        });
        assert_eq!(
            render_type(&query).unwrap(),
            vec!["type Query {", "  schema: __Schema!", "}"]
        );
    }
}
