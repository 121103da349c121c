use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors
    Error,
    /// Warnings about the configuration and errors
    #[default]
    Warn,
    /// Info, warning and error messages
    Info,
    /// Also fields omitted from the fragment and why
    Debug,
    /// Every expanded field, from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "graphql_fragments=error,gqlfrag=error,off",
            LogLevel::Warn => "graphql_fragments=warn,gqlfrag=warn,off",
            LogLevel::Info => "graphql_fragments=info,gqlfrag=info,off",
            LogLevel::Debug => "graphql_fragments=debug,gqlfrag=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        f.write_str(name)
    }
}
