use std::fmt;

use crate::{FieldDefinition, SchemaTypeMap, TypeKind, TypeRef};

/// The relation named by connection types, e.g. `PostConnection.edges`.
const EDGES_FIELD: &str = "edges";
const NODE_FIELD: &str = "node";

/// A field of a [`FragmentNode`](crate::FragmentNode), classified once when the
/// graph is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub shape: FieldShape,
    pub args: Vec<ArgumentDescriptor>,
}

/// How a field is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Scalars, enums and lists of them. Always selected.
    ///
    /// Fields typed with a name the type map does not declare land here too,
    /// so with a partial type map they are selected bare instead of being
    /// omitted. Only a connection whose node type is not a graph node is
    /// omitted at render time.
    Scalar,
    /// A list of objects.
    List { element: String },
    /// An object exposing `edges { node }`. `node` is the type behind
    /// `edges.node` when the schema declares one.
    Connection { node: Option<String> },
    /// Any other object.
    Object { type_name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub ty: ArgumentType,
}

/// The declared type of an argument, as far as coercion cares. Non-null
/// wrappers are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentType {
    String,
    Id,
    Int,
    List(Box<ArgumentType>),
    /// Float, Boolean, enums, input objects and custom scalars.
    Other(String),
}

impl FieldDescriptor {
    pub(crate) fn classify(definition: &FieldDefinition, types: &SchemaTypeMap) -> Self {
        FieldDescriptor {
            name: definition.name.clone(),
            shape: FieldShape::classify(&definition.ty, types),
            args: definition
                .args
                .iter()
                .map(|arg| ArgumentDescriptor {
                    name: arg.name.clone(),
                    ty: ArgumentType::from(&arg.ty),
                })
                .collect(),
        }
    }
}

impl FieldShape {
    fn classify(ty: &TypeRef, types: &SchemaTypeMap) -> Self {
        let type_name = ty.name();

        let object = match types.get(type_name) {
            Some(object) if object.kind == TypeKind::Object => object,
            _ => return FieldShape::Scalar,
        };

        if ty.is_list() {
            return FieldShape::List {
                element: type_name.to_owned(),
            };
        }

        match object.field(EDGES_FIELD) {
            Some(edges) => FieldShape::Connection {
                node: types
                    .get(edges.ty.name())
                    .and_then(|edge| edge.field(NODE_FIELD))
                    .map(|node| node.ty.name().to_owned()),
            },
            None => FieldShape::Object {
                type_name: type_name.to_owned(),
            },
        }
    }
}

impl From<&TypeRef> for ArgumentType {
    fn from(ty: &TypeRef) -> Self {
        match ty {
            TypeRef::NonNull(inner) => ArgumentType::from(inner.as_ref()),
            TypeRef::List(inner) => ArgumentType::List(Box::new(ArgumentType::from(inner.as_ref()))),
            TypeRef::Named(name) => match name.as_str() {
                "String" => ArgumentType::String,
                "ID" => ArgumentType::Id,
                "Int" => ArgumentType::Int,
                other => ArgumentType::Other(other.to_owned()),
            },
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentType::String => f.write_str("String"),
            ArgumentType::Id => f.write_str("ID"),
            ArgumentType::Int => f.write_str("Int"),
            ArgumentType::List(inner) => write!(f, "[{inner}]"),
            ArgumentType::Other(name) => f.write_str(name),
        }
    }
}
