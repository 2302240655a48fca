//! Save-mode policies applied when the sink initializes against a table.

use std::fmt;

use paimon_common::config::{OptionType, decode_enum_literal, enum_literal};
use paimon_common::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// How the sink treats the table schema at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaSaveMode {
    /// Drop and recreate the table.
    RecreateSchema,
    /// Create the table only if it does not exist (default).
    #[default]
    CreateSchemaWhenNotExist,
    /// Fail if the table does not exist.
    ErrorWhenSchemaNotExist,
    /// Leave the schema untouched.
    Ignore,
}

/// How the sink treats rows already present in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSaveMode {
    /// Delete existing rows before writing.
    DropData,
    /// Keep existing rows and append (default).
    #[default]
    AppendData,
    /// Run a user supplied statement before writing.
    CustomProcessing,
    /// Fail if the table already holds rows.
    ErrorWhenDataExists,
}

impl OptionType for SchemaSaveMode {
    const TYPE_NAME: &'static str = "schema save mode";

    fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        decode_enum_literal(key, value, Self::TYPE_NAME)
    }

    fn render(&self) -> String {
        enum_literal(self)
    }
}

impl OptionType for DataSaveMode {
    const TYPE_NAME: &'static str = "data save mode";

    fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        decode_enum_literal(key, value, Self::TYPE_NAME)
    }

    fn render(&self) -> String {
        enum_literal(self)
    }
}

impl fmt::Display for SchemaSaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for DataSaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
