//! Error types for option registration, config loading and resolution.

use snafu::prelude::*;

// ============ Config Errors ============

/// Errors that can occur while loading, coercing or resolving configuration.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    /// A required field resolved to nothing.
    #[snafu(display("Missing required field '{field}' (set option '{key}')"))]
    MissingRequiredField {
        field: &'static str,
        key: &'static str,
    },

    /// A raw value could not be coerced into the option's declared type.
    #[snafu(display("Option '{key}' expects {expected}: {message}"))]
    TypeCoercion {
        key: String,
        expected: &'static str,
        message: String,
    },

    /// Two options in the same registry share a key.
    #[snafu(display("Option key '{key}' is registered more than once"))]
    DuplicateOptionKey { key: String },

    /// Environment variable interpolation failed.
    #[snafu(display("Environment variable interpolation failed:\n{message}"))]
    EnvInterpolation { message: String },

    /// Failed to parse YAML configuration.
    #[snafu(display("Failed to parse YAML: {source}"))]
    YamlParse { source: serde_yaml::Error },

    /// The YAML document is not a mapping of option keys.
    #[snafu(display("Invalid config document: {message}"))]
    InvalidDocument { message: String },

    /// Failed to read configuration file.
    #[snafu(display("Failed to read configuration file: {source}"))]
    ReadFile { source: std::io::Error },

    /// Unsupported config file format.
    #[snafu(display("Unsupported config format for {}: only .yaml/.yml supported", path.display()))]
    UnsupportedFormat { path: std::path::PathBuf },

    /// Failed to read configuration directory.
    #[snafu(display("Failed to read directory {}", path.display()))]
    ReadDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// Multiple configuration errors occurred.
    #[snafu(display("Multiple config errors:\n{}", errors.join("\n")))]
    MultipleErrors { errors: Vec<String> },
}
