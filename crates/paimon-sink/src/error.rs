//! Error types for the paimon-sink binary.

use snafu::prelude::*;

// Re-export common errors
pub use paimon_common::error::ConfigError;

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CliError {
    /// No configuration source was given.
    #[snafu(display("no config files or directories specified"))]
    NoConfigSources,

    /// Configuration error.
    #[snafu(display("Configuration error: {source}"))]
    Config { source: ConfigError },

    /// Failed to render the resolved configuration.
    #[snafu(display("Failed to render resolved configuration: {source}"))]
    Render { source: serde_json::Error },
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        CliError::Config { source }
    }
}
