use std::{collections::BTreeMap, path::Path};

use indexmap::IndexSet;

use crate::Error;

/// Settings applied when building a [`Graph`](crate::Graph).
///
/// ```toml
/// max_depth = 4
///
/// [types.User]
/// whitelist = ["id", "name", "friends"]
/// expandable = ["friends"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// How many relations deep an expansion may descend below the root type.
    /// Unlimited when not set.
    pub max_depth: Option<usize>,
    /// Per-type settings, by type name.
    pub types: BTreeMap<String, NodeConfig>,
}

impl GraphConfig {
    /// Reads a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        Ok(toml::from_str(contents)?)
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>, config: NodeConfig) -> Self {
        self.types.insert(type_name.into(), config);
        self
    }
}

/// Settings for a single object type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// When set, only these fields are ever selected.
    pub whitelist: Option<IndexSet<String>>,
    /// When set, only these list and connection fields may be expanded.
    pub expandable: Option<IndexSet<String>>,
}

impl NodeConfig {
    #[must_use]
    pub fn with_whitelist<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_expandable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expandable = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}
