//! The option registry for the Paimon sink.

use std::collections::HashMap;
use std::sync::LazyLock;

use paimon_common::config::{ConfigOption, OptionRegistry};
use paimon_common::error::ConfigError;

use crate::config::identity::IdentityOptions;
use crate::config::rule::OptionRule;
use crate::save_mode::{DataSaveMode, SchemaSaveMode};

pub const SCHEMA_SAVE_MODE: &str = "schema_save_mode";
pub const DATA_SAVE_MODE: &str = "data_save_mode";
pub const PRIMARY_KEYS: &str = "paimon.table.primary-keys";
pub const PARTITION_KEYS: &str = "paimon.table.partition-keys";
pub const WRITE_PROPS: &str = "paimon.table.write-props";

static SINK_OPTIONS: LazyLock<SinkOptions> =
    LazyLock::new(|| SinkOptions::new().expect("built-in sink option keys are unique"));

/// Every option the sink recognizes.
///
/// Built once per process through [`SinkOptions::global`] and read-only
/// afterwards. The declared options are only reachable through accessors,
/// so they always match what [`SinkOptions::registry`] reports.
///
/// ```compile_fail
/// use paimon_common::config::ConfigOption;
/// use paimon_sink::SinkOptions;
///
/// let mut options = SinkOptions::new().unwrap();
/// options.primary_keys = ConfigOption::new("table");
/// ```
#[derive(Debug, Clone)]
pub struct SinkOptions {
    identity: IdentityOptions,
    schema_save_mode: ConfigOption<SchemaSaveMode>,
    data_save_mode: ConfigOption<DataSaveMode>,
    primary_keys: ConfigOption<String>,
    partition_keys: ConfigOption<String>,
    write_props: ConfigOption<HashMap<String, String>>,
    registry: OptionRegistry,
}

impl SinkOptions {
    /// Declare the sink options and index them by key.
    pub fn new() -> Result<Self, ConfigError> {
        let identity = IdentityOptions::new();
        let schema_save_mode = ConfigOption::new(SCHEMA_SAVE_MODE)
            .with_default(SchemaSaveMode::CreateSchemaWhenNotExist)
            .with_description("How the table schema is handled when the sink starts");
        let data_save_mode = ConfigOption::new(DATA_SAVE_MODE)
            .with_default(DataSaveMode::AppendData)
            .with_description("How existing table data is handled when the sink starts");
        let primary_keys = ConfigOption::new(PRIMARY_KEYS).with_description(
            "Comma-separated list of columns that identify a row in created tables",
        );
        let partition_keys = ConfigOption::new(PARTITION_KEYS)
            .with_description("Comma-separated list of partition columns for created tables");
        let write_props = ConfigOption::new(WRITE_PROPS)
            .with_default(HashMap::new())
            .with_description(
                "Properties passed through to Paimon table initialization, such as 'file.format' or 'bucket'",
            );

        let mut registry = OptionRegistry::new();
        identity.register_into(&mut registry)?;
        registry.register(&schema_save_mode)?;
        registry.register(&data_save_mode)?;
        registry.register(&primary_keys)?;
        registry.register(&partition_keys)?;
        registry.register(&write_props)?;

        Ok(Self {
            identity,
            schema_save_mode,
            data_save_mode,
            primary_keys,
            partition_keys,
            write_props,
            registry,
        })
    }

    /// The process-wide sink options.
    pub fn global() -> &'static Self {
        &SINK_OPTIONS
    }

    pub fn identity(&self) -> &IdentityOptions {
        &self.identity
    }

    pub fn schema_save_mode(&self) -> &ConfigOption<SchemaSaveMode> {
        &self.schema_save_mode
    }

    pub fn data_save_mode(&self) -> &ConfigOption<DataSaveMode> {
        &self.data_save_mode
    }

    pub fn primary_keys(&self) -> &ConfigOption<String> {
        &self.primary_keys
    }

    pub fn partition_keys(&self) -> &ConfigOption<String> {
        &self.partition_keys
    }

    pub fn write_props(&self) -> &ConfigOption<HashMap<String, String>> {
        &self.write_props
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Required/optional classification of the registered options.
    pub fn rule(&self) -> OptionRule {
        OptionRule::new(
            self.identity
                .required()
                .into_iter()
                .map(|(field, option)| (field, option.clone())),
        )
    }
}
