//! paimon-sink: resolves the configuration a Paimon sink writes with.
//!
//! This crate handles:
//! - Declaring the options the sink recognizes and their defaults
//! - Resolving a read-only config snapshot into an immutable [`SinkConfig`]
//! - Validating required table identity fields

pub mod cli;
pub mod config;
pub mod error;
pub mod save_mode;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::{OptionRule, SinkConfig, SinkOptions, TableIdentity};
pub use error::{CliError, ConfigError};
pub use save_mode::{DataSaveMode, SchemaSaveMode};

// Re-export from paimon-common
pub use paimon_common::{ConfigPath, ReadonlyConfig, init_tracing, load_from_paths, parse_list};
