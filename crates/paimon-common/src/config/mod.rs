//! Configuration infrastructure: typed options, read-only snapshots and loading.

mod loader;
pub mod option;
mod path;
mod readonly;
mod vars;

pub use loader::load_from_paths;
pub use option::{
    ConfigOption, OptionDescriptor, OptionRegistry, OptionType, decode_enum_literal, enum_literal,
};
pub use path::{ConfigPath, is_yaml_file};
pub use readonly::ReadonlyConfig;
pub use vars::{interpolate, interpolate_with};
