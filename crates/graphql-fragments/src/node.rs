mod field;

use heck::ToSnakeCase;
use indexmap::IndexMap;

pub use self::field::{ArgumentDescriptor, ArgumentType, FieldDescriptor, FieldShape};
use crate::{format_arguments, templates, Error, Expansion, Graph, NodeConfig, SchemaTypeMap, TypeDescriptor};

/// Separator of type names in the rendered ancestor path.
const PATH_SEPARATOR: &str = " > ";

/// One object type of a [`Graph`], with its fields classified at build time.
#[derive(Debug, Clone)]
pub struct FragmentNode {
    name: String,
    fields: IndexMap<String, FieldDescriptor>,
    config: Option<NodeConfig>,
}

impl FragmentNode {
    pub(crate) fn new(descriptor: &TypeDescriptor, types: &SchemaTypeMap, config: Option<NodeConfig>) -> Self {
        let fields = descriptor
            .fields
            .iter()
            .map(|definition| (definition.name.clone(), FieldDescriptor::classify(definition, types)))
            .collect();

        FragmentNode {
            name: descriptor.name.clone(),
            fields,
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared fields, whitelisted or not.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn config(&self) -> Option<&NodeConfig> {
        self.config.as_ref()
    }

    /// Field names that may be selected, in declaration order.
    pub fn selected_fields(&self) -> impl Iterator<Item = &str> {
        self.selected().map(|field| field.name.as_str())
    }

    /// Whether a list or connection field may be expanded.
    pub fn can_expand(&self, field_name: &str) -> bool {
        match self.config.as_ref().and_then(|config| config.expandable.as_ref()) {
            Some(expandable) => expandable.contains(field_name),
            None => true,
        }
    }

    fn selected(&self) -> impl Iterator<Item = &FieldDescriptor> {
        let whitelist = self.config.as_ref().and_then(|config| config.whitelist.as_ref());

        self.fields
            .values()
            .filter(move |field| match whitelist {
                Some(whitelist) => whitelist.contains(&field.name),
                None => true,
            })
    }

    /// Renders the selection body of this type.
    ///
    /// `ancestors` holds the type names from the root down to the parent of
    /// this node, and is empty for the root.
    pub fn fragment(&self, graph: &Graph, expansion: &Expansion, ancestors: &[&str]) -> Result<String, Error> {
        let mut path = Vec::with_capacity(ancestors.len() + 1);
        path.extend_from_slice(ancestors);
        path.push(self.name.as_str());

        let mut lines = Vec::new();

        for field in self.selected() {
            let line = match &field.shape {
                FieldShape::Scalar => Some(field.name.clone()),
                FieldShape::List { element } => {
                    match expansion.field(&field.name).filter(|_| self.can_expand(&field.name)) {
                        Some(entry) => self
                            .expand_into(graph, field, element, entry, &path)?
                            .map(|(arguments, body)| templates::list_fragment(&field.name, &arguments, &body)),
                        None => None,
                    }
                }
                FieldShape::Connection { node } => {
                    match expansion.field(&field.name).filter(|_| self.can_expand(&field.name)) {
                        Some(entry) => {
                            let type_name = connection_type_name(graph, &field.name, node.as_deref());

                            self.expand_into(graph, field, &type_name, entry, &path)?
                                .map(|(arguments, body)| templates::connection_fragment(&field.name, &arguments, &body))
                        }
                        None => None,
                    }
                }
                FieldShape::Object { type_name } => match expansion.field(&field.name) {
                    Some(entry) => self
                        .expand_into(graph, field, type_name, entry, &path)?
                        .map(|(arguments, body)| templates::object_fragment(&field.name, &arguments, &body)),
                    None => None,
                },
            };

            lines.extend(line);
        }

        Ok(lines.join("\n"))
    }

    /// Renders the argument clause and the body of `field` as an instance of
    /// `type_name`. `None` when the graph has no such type.
    fn expand_into(
        &self,
        graph: &Graph,
        field: &FieldDescriptor,
        type_name: &str,
        entry: &Expansion,
        path: &[&str],
    ) -> Result<Option<(String, String)>, Error> {
        let Some(child) = graph.node(type_name) else {
            tracing::debug!(
                parent = %self.name,
                field = %field.name,
                type_name,
                path = %path.join(PATH_SEPARATOR),
                "omitting field, its type is not part of the fragment graph"
            );
            return Ok(None);
        };

        if let Some(limit) = graph.max_depth() {
            if path.len() > limit {
                let mut path = path.join(PATH_SEPARATOR);
                path.push_str(PATH_SEPARATOR);
                path.push_str(child.name());

                return Err(Error::DepthLimitExceeded { limit, path });
            }
        }

        let arguments = format_arguments(field, entry.arguments())?;
        let body = child.fragment(graph, entry, path)?;

        tracing::trace!(parent = %self.name, field = %field.name, child = %child.name, "expanded field");

        Ok(Some((arguments, body)))
    }
}

/// The type a connection field is expanded as.
///
/// The singular snake case form of the field name wins when the graph knows it
/// (`recent_comments` for `recentComments`). Otherwise this is the type behind
/// `edges.node`.
fn connection_type_name(graph: &Graph, field_name: &str, node: Option<&str>) -> String {
    let singular = field_name.strip_suffix('s').unwrap_or(field_name).to_snake_case();

    match node {
        Some(node) if graph.node(&singular).is_none() => node.to_owned(),
        _ => singular,
    }
}
