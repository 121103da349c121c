use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use graphql_fragments::{Expansion, Graph, GraphConfig};

mod log;

pub(crate) use log::LogLevel;

/// Prefix marking an `--expand` value as a path.
const FILE_PREFIX: char = '@';

#[derive(Debug, Parser)]
#[command(name = "gqlfrag", version)]
#[command(arg_required_else_help = true)]
/// Render the selection body of a GraphQL fragment from a schema file
pub(crate) struct Args {
    /// Name of the object type to render
    pub type_name: String,
    /// Path to the schema. Files ending in `.json` are read as introspection
    /// results, anything else as SDL.
    #[arg(long, short, env = "GQLFRAG_SCHEMA")]
    pub schema: PathBuf,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "GQLFRAG_CONFIG")]
    pub config: Option<PathBuf>,
    /// Relations to expand, as inline JSON or `@path/to/expansion.json`
    #[arg(long, short)]
    pub expand: Option<String>,
    /// Wrap the output in `fragment <NAME> on <TYPE_NAME> { ... }`
    #[arg(long, short)]
    pub name: Option<String>,
    /// Set the logging level
    #[arg(long = "log", env = "GQLFRAG_LOG", default_value_t = LogLevel::default())]
    pub log_level: LogLevel,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<GraphConfig> {
        match &self.config {
            Some(path) => Ok(GraphConfig::load(path)?),
            None => Ok(GraphConfig::default()),
        }
    }

    pub fn graph(&self) -> anyhow::Result<Graph> {
        let config = self.config()?;
        let schema = fs::read_to_string(&self.schema)
            .with_context(|| format!("error loading schema from '{}'", self.schema.display()))?;

        let graph = if self.is_introspection() {
            Graph::from_introspection_json(&schema, config)?
        } else {
            Graph::from_sdl(&schema, config)?
        };

        Ok(graph)
    }

    pub fn expansion(&self) -> anyhow::Result<Expansion> {
        let Some(expand) = self.expand.as_deref() else {
            return Ok(Expansion::default());
        };

        let json = match expand.strip_prefix(FILE_PREFIX) {
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("error loading expansion from '{path}'"))?
            }
            None => expand.to_owned(),
        };

        Ok(Expansion::from_json(&json)?)
    }

    fn is_introspection(&self) -> bool {
        self.schema
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
    }
}
