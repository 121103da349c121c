//! Render GraphQL fragments from an introspected schema.
//!
//! A [`Graph`] is built once from a [`SchemaTypeMap`] (usually parsed from an
//! introspection result or from SDL) and an optional [`GraphConfig`]. It then
//! renders the selection body of a fragment for any object type, descending
//! into the relations named by an [`Expansion`] tree.
//!
//! ```
//! use graphql_fragments::{Expansion, Graph, GraphConfig};
//!
//! let graph = Graph::from_sdl(
//!     r#"
//!     type User {
//!       id: ID!
//!       friends(first: Int): [User!]!
//!     }
//!     "#,
//!     GraphConfig::default(),
//! )
//! .unwrap();
//!
//! let expansion = Expansion::from_json(r#"{ "friends": { "args": { "first": 10 } } }"#).unwrap();
//! let fragment = graph.fragment("User", &expansion).unwrap();
//!
//! assert_eq!(fragment, "id\nfriends(first: 10) {\n  id\n}");
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod arguments;
mod config;
mod error;
mod expansion;
mod graph;
mod node;
mod schema;
mod templates;

pub use arguments::{format_arguments, Arguments};
pub use config::{GraphConfig, NodeConfig};
pub use error::{Error, ValueKind};
pub use expansion::Expansion;
pub use graph::Graph;
pub use node::{ArgumentDescriptor, ArgumentType, FieldDescriptor, FieldShape, FragmentNode};
pub use schema::{
    parse_introspection, parse_sdl, FieldDefinition, InputValueDefinition, SchemaTypeMap, TypeDescriptor, TypeKind,
    TypeRef,
};
pub use templates::{connection_fragment, fragment_definition, list_fragment, object_fragment};
