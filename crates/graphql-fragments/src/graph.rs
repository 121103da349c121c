use indexmap::IndexMap;

use crate::{
    parse_introspection, parse_sdl, templates, Error, Expansion, FragmentNode, GraphConfig, SchemaTypeMap, TypeKind,
};

/// Fragment nodes of every object type in a schema, by type name.
///
/// Immutable once built, so a single graph can serve concurrent renders.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: IndexMap<String, FragmentNode>,
    max_depth: Option<usize>,
}

impl Graph {
    /// Builds the graph from a schema type map.
    ///
    /// Only object types become nodes. Fails with [`Error::SchemaMissing`] when
    /// no type map is given.
    pub fn build(types: Option<&SchemaTypeMap>, config: GraphConfig) -> Result<Self, Error> {
        let types = types.ok_or(Error::SchemaMissing)?;
        let GraphConfig {
            max_depth,
            types: mut type_configs,
        } = config;

        let nodes: IndexMap<_, _> = types
            .iter()
            .filter(|descriptor| descriptor.kind == TypeKind::Object)
            .map(|descriptor| {
                let config = type_configs.remove(&descriptor.name);
                (descriptor.name.clone(), FragmentNode::new(descriptor, types, config))
            })
            .collect();

        for type_name in type_configs.keys() {
            tracing::warn!(
                type_name = %type_name,
                "configuration given for a type that is not an object type of the schema"
            );
        }

        tracing::debug!(nodes = nodes.len(), ?max_depth, "built fragment graph");

        Ok(Graph { nodes, max_depth })
    }

    /// Builds the graph from the JSON result of an introspection query.
    pub fn from_introspection_json(json: &str, config: GraphConfig) -> Result<Self, Error> {
        let types = parse_introspection(json)?;

        Self::build(types.as_ref(), config)
    }

    /// Builds the graph from GraphQL SDL.
    pub fn from_sdl(sdl: &str, config: GraphConfig) -> Result<Self, Error> {
        let types = parse_sdl(sdl)?;

        Self::build(Some(&types), config)
    }

    pub fn node(&self, type_name: &str) -> Option<&FragmentNode> {
        self.nodes.get(type_name)
    }

    pub fn type_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Renders the selection body for `type_name`.
    pub fn fragment(&self, type_name: &str, expansion: &Expansion) -> Result<String, Error> {
        self.fragment_with_ancestors(type_name, expansion, &[])
    }

    /// Renders the selection body for `type_name` as if it was reached through
    /// `ancestors`, which count towards the maximum depth.
    pub fn fragment_with_ancestors(
        &self,
        type_name: &str,
        expansion: &Expansion,
        ancestors: &[&str],
    ) -> Result<String, Error> {
        let node = self.node(type_name).ok_or_else(|| Error::NodeNotFound {
            name: type_name.to_owned(),
        })?;

        node.fragment(self, expansion, ancestors)
    }

    /// Renders `fragment <fragment_name> on <type_name> { ... }`.
    pub fn fragment_definition(
        &self,
        fragment_name: &str,
        type_name: &str,
        expansion: &Expansion,
    ) -> Result<String, Error> {
        let body = self.fragment(type_name, expansion)?;

        Ok(templates::fragment_definition(fragment_name, type_name, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDefinition, NodeConfig, TypeDescriptor, TypeRef};

    fn types() -> SchemaTypeMap {
        [
            TypeDescriptor::object("Query").with_field(FieldDefinition::new("viewer", TypeRef::named("User"))),
            TypeDescriptor::object("User").with_field(FieldDefinition::new("id", TypeRef::named("ID"))),
            TypeDescriptor::scalar("ID"),
            TypeDescriptor::new("Role", TypeKind::Enum),
            TypeDescriptor::new("Node", TypeKind::Interface),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn only_object_types_become_nodes() {
        let graph = Graph::build(Some(&types()), GraphConfig::default()).unwrap();

        assert_eq!(graph.type_names().collect::<Vec<_>>(), ["Query", "User"]);
        assert_eq!(graph.len(), 2);
        assert!(graph.node("ID").is_none());
    }

    #[test]
    fn configs_are_attached_by_type_name() {
        let config = GraphConfig::default()
            .with_type("User", NodeConfig::default().with_whitelist(["id"]))
            .with_type("Role", NodeConfig::default());
        let graph = Graph::build(Some(&types()), config).unwrap();

        assert!(graph.node("User").unwrap().config().is_some());
        assert!(graph.node("Query").unwrap().config().is_none());
    }

    #[test]
    fn schema_missing() {
        let error = Graph::build(None, GraphConfig::default()).unwrap_err();

        insta::assert_snapshot!(error, @"A GraphQL schema must be provided to build a fragment graph");
    }

    #[test]
    fn introspection_without_schema() {
        let error = Graph::from_introspection_json(r#"{ "data": null }"#, GraphConfig::default()).unwrap_err();

        assert!(matches!(error, Error::SchemaMissing));
    }

    #[test]
    fn unknown_root() {
        let graph = Graph::build(Some(&types()), GraphConfig::default()).unwrap();

        let error = graph.fragment("Role", &Expansion::new()).unwrap_err();

        insta::assert_snapshot!(error, @"Type 'Role' does not exist in the fragment graph");
    }

    #[test]
    fn definition() {
        let graph = Graph::build(Some(&types()), GraphConfig::default()).unwrap();
        let expansion = Expansion::new().expand("viewer", Expansion::new());

        let fragment = graph.fragment_definition("ViewerFields", "Query", &expansion).unwrap();

        assert_eq!(fragment, "fragment ViewerFields on Query {\n  viewer {\n    id\n  }\n}");
    }

    #[test]
    fn graph_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Graph>();
    }
}
