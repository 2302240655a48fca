//! paimon-common: configuration infrastructure for the Paimon sink.
//!
//! - `config/` - typed option descriptors, the option registry, read-only
//!   config snapshots and YAML loading with environment variable interpolation
//! - `list` - delimited list parsing
//! - `tracing` - tracing subscriber setup
//! - `error` - configuration error types

pub mod config;
pub mod error;
pub mod list;
pub mod tracing;

// Re-export commonly used items
pub use config::{
    ConfigOption, ConfigPath, OptionDescriptor, OptionRegistry, OptionType, ReadonlyConfig,
    load_from_paths,
};
pub use error::ConfigError;
pub use list::parse_list;
pub use self::tracing::init_tracing;
