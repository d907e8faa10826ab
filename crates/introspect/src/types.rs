//! Type definitions for GraphQL introspection responses.
//!
//! These types mirror the parts of an introspection query response that the
//! SDL renderer reads. Keys not listed here (descriptions, directives,
//! deprecation flags, root operation types) are accepted and ignored.

use crate::{IntrospectionError, Result};
use serde::{Deserialize, Serialize};

/// Prefix reserved for introspection meta-types such as `__Schema`.
pub const META_TYPE_PREFIX: &str = "__";

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// The type list of an introspected schema, in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionSchema {
    pub types: Vec<IntrospectionType>,
}

/// A reference to a named type, as found in `possibleTypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// A top-level type descriptor, dispatched on its `kind`.
///
/// Any `kind` outside the six named kinds deserializes to
/// [`IntrospectionType::Unsupported`], keeping the kind and name, so newer
/// introspection extensions don't abort parsing of the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum IntrospectionType {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
    Unsupported(UnsupportedType),
}

/// A type entry whose `kind` the renderer does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedType {
    pub kind: String,
    pub name: Option<String>,
}

impl TryFrom<serde_json::Value> for IntrospectionType {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> std::result::Result<Self, Self::Error> {
        let header = UnsupportedType::deserialize(&value)?;
        let type_def = match header.kind.as_str() {
            "SCALAR" => Self::Scalar(ScalarType::deserialize(value)?),
            "OBJECT" => Self::Object(ObjectType::deserialize(value)?),
            "INTERFACE" => Self::Interface(InterfaceType::deserialize(value)?),
            "UNION" => Self::Union(UnionType::deserialize(value)?),
            "ENUM" => Self::Enum(EnumType::deserialize(value)?),
            "INPUT_OBJECT" => Self::InputObject(InputObjectType::deserialize(value)?),
            _ => Self::Unsupported(header),
        };
        Ok(type_def)
    }
}

impl IntrospectionType {
    /// Returns the type name, if the entry has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(t) => Some(&t.name),
            Self::Object(t) => Some(&t.name),
            Self::Interface(t) => Some(&t.name),
            Self::Union(t) => Some(&t.name),
            Self::Enum(t) => Some(&t.name),
            Self::InputObject(t) => Some(&t.name),
            Self::Unsupported(t) => t.name.as_deref(),
        }
    }

    /// Whether this is an introspection meta-type (`__Type`, `__Schema`, ...).
    #[must_use]
    pub fn is_meta_type(&self) -> bool {
        self.name()
            .is_some_and(|name| name.starts_with(META_TYPE_PREFIX))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarType {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceType {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    pub possible_types: Vec<NamedTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub enum_values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub input_fields: Vec<InputValue>,
}

/// A field of an object or interface type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A field of an input object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
}

/// A possibly wrapped type reference.
///
/// Wrapper kinds (`NON_NULL`, `LIST`) carry the wrapped reference in
/// `of_type`; named kinds carry `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// The spelling used in introspection JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeRef {
    /// A reference to a named type.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Wraps `inner` in a `NON_NULL`.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Wraps `inner` in a `LIST`.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Converts the type reference to a GraphQL type string.
    ///
    /// Each call unwraps one layer, so `[String!]!` comes from
    /// `NON_NULL(LIST(NON_NULL(String)))`.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectionError::MalformedTypeRef`] when a wrapper has no
    /// `ofType`, and [`IntrospectionError::MissingTypeName`] when a named kind
    /// has no `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphql_introspect::{TypeKind, TypeRef};
    /// let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(
    ///     TypeRef::named(TypeKind::Scalar, "Int"),
    /// )));
    /// assert_eq!(type_ref.to_type_string().unwrap(), "[Int!]!");
    /// ```
    pub fn to_type_string(&self) -> Result<String> {
        match self.kind {
            TypeKind::NonNull => Ok(format!("{}!", self.inner()?.to_type_string()?)),
            TypeKind::List => Ok(format!("[{}]", self.inner()?.to_type_string()?)),
            kind => self
                .name
                .clone()
                .ok_or(IntrospectionError::MissingTypeName { kind }),
        }
    }

    fn inner(&self) -> Result<&Self> {
        self.of_type
            .as_deref()
            .ok_or(IntrospectionError::MalformedTypeRef { kind: self.kind })
    }
}

/// Lossy rendering for diagnostics: a missing `ofType` or `name` is written
/// as `?`. Use [`TypeRef::to_type_string`] to reject malformed references.
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.of_type.as_deref()) {
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (TypeKind::NonNull, None) => f.write_str("?!"),
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeKind::List, None) => f.write_str("[?]"),
            _ => f.write_str(self.name.as_deref().unwrap_or("?")),
        }
    }
}
