use std::path::PathBuf;

/// Errors raised while building a [`Graph`](crate::Graph) or rendering a fragment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("A GraphQL schema must be provided to build a fragment graph")]
    SchemaMissing,
    #[error("Type '{name}' does not exist in the fragment graph")]
    NodeNotFound { name: String },
    #[error("Argument '{argument}' on field '{field}' must be of type {expected}, found a {found} value")]
    ArgumentType {
        field: String,
        argument: String,
        expected: String,
        found: ValueKind,
    },
    #[error("Expanding '{path}' exceeds the maximum expansion depth of {limit}")]
    DepthLimitExceeded { limit: usize, path: String },
    #[error("Invalid introspection result: {0}")]
    InvalidIntrospection(#[source] serde_json::Error),
    #[error("Invalid expansion tree: {0}")]
    InvalidExpansion(#[source] serde_json::Error),
    #[error("Invalid SDL: {message}")]
    InvalidSdl { message: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

/// The kind of a runtime argument value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    List,
    Object,
    Null,
}

impl From<&serde_json::Value> for ValueKind {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(_) => ValueKind::String,
            serde_json::Value::Number(_) => ValueKind::Number,
            serde_json::Value::Bool(_) => ValueKind::Boolean,
            serde_json::Value::Array(_) => ValueKind::List,
            serde_json::Value::Object(_) => ValueKind::Object,
            serde_json::Value::Null => ValueKind::Null,
        }
    }
}
