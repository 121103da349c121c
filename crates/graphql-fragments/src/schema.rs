//! The type map a [`Graph`](crate::Graph) is built from.
//!
//! This is the boundary with whatever produced the schema. Both ingestion paths
//! ([introspection results](parse_introspection) and [SDL](parse_sdl)) produce the
//! same [`SchemaTypeMap`], and callers with another schema source can assemble one
//! by hand.

mod introspection;
mod sdl;

use std::fmt;

use indexmap::IndexMap;

pub use self::{introspection::parse_introspection, sdl::parse_sdl};

/// Named types of a schema, in declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SchemaTypeMap {
    types: IndexMap<String, TypeDescriptor>,
}

impl SchemaTypeMap {
    /// Inserts a type, replacing any previous type with the same name.
    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut TypeDescriptor> {
        self.types.get_mut(name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for SchemaTypeMap {
    fn from_iter<T: IntoIterator<Item = TypeDescriptor>>(iter: T) -> Self {
        let mut types = SchemaTypeMap::default();

        for descriptor in iter {
            types.insert(descriptor);
        }

        types
    }
}

/// The kind of a named type, as reported by introspection (`__TypeKind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
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

/// A named type and, for object and interface types, its output fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    pub fields: Vec<FieldDefinition>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDescriptor {
            name: name.into(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object)
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Scalar)
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// An output field definition.
///
/// ```graphql,ignore
/// type User {
///   friends(first: Int): [User!]!
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub args: Vec<InputValueDefinition>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDefinition {
            name: name.into(),
            ty,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.args.push(InputValueDefinition { name: name.into(), ty });
        self
    }
}

/// A field argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub ty: TypeRef,
}

/// A possibly wrapped reference to a named type, e.g. `[Post!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The innermost named type.
    ///
    /// ```graphql,ignore
    /// type User {
    ///   posts: [Post!]!
    ///           ^^^^
    /// }
    /// ```
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.name(),
        }
    }

    /// Is there a list wrapper anywhere around the named type?
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
