//! Configuration for the Paimon sink.
//!
//! [`SinkConfig::resolve`] turns a [`ReadonlyConfig`] snapshot into the
//! validated, immutable configuration the write path consumes.
//!
//! # Example
//!
//! ```yaml
//! catalog_name: paimon
//! warehouse: hdfs:///tmp/paimon
//! database: sales
//! table: orders
//! schema_save_mode: RECREATE_SCHEMA
//! paimon.table.primary-keys: "order_id, dt"
//! paimon.table.partition-keys: dt
//! paimon.table.write-props:
//!   bucket: 4
//!   file.format: orc
//! ```

pub mod identity;
mod options;
mod rule;

use std::collections::HashMap;

use paimon_common::config::ReadonlyConfig;
use paimon_common::error::ConfigError;
use paimon_common::parse_list;
use serde::Serialize;
use tracing::debug;

pub use identity::{IdentityOptions, TableIdentity};
pub use options::{
    DATA_SAVE_MODE, PARTITION_KEYS, PRIMARY_KEYS, SCHEMA_SAVE_MODE, SinkOptions, WRITE_PROPS,
};
pub use rule::OptionRule;

use crate::save_mode::{DataSaveMode, SchemaSaveMode};

/// Delimiter for the primary and partition key lists.
pub const KEY_LIST_DELIMITER: &str = ",";

/// Resolved Paimon sink configuration.
///
/// Only constructed through [`SinkConfig::resolve`]; there are no setters.
/// Key lists and write properties are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkConfig {
    #[serde(flatten)]
    identity: TableIdentity,
    schema_save_mode: SchemaSaveMode,
    data_save_mode: DataSaveMode,
    primary_keys: Vec<String>,
    partition_keys: Vec<String>,
    write_props: HashMap<String, String>,
}

impl SinkConfig {
    /// Resolve against the process-wide sink options.
    pub fn resolve(source: &ReadonlyConfig) -> Result<Self, ConfigError> {
        Self::resolve_with(SinkOptions::global(), source)
    }

    /// Resolve against an explicit set of sink options.
    ///
    /// Required identity fields are checked in order and the first absent
    /// one fails with [`ConfigError::MissingRequiredField`]. Coercion errors
    /// from `source` are returned unchanged.
    pub fn resolve_with(
        options: &SinkOptions,
        source: &ReadonlyConfig,
    ) -> Result<Self, ConfigError> {
        let identity = TableIdentity::resolve(options.identity(), source)?;

        let schema_save_mode = source
            .get(options.schema_save_mode())?
            .unwrap_or_default();
        let data_save_mode = source.get(options.data_save_mode())?.unwrap_or_default();

        let primary_keys = parse_list(
            source.get(options.primary_keys())?.as_deref(),
            KEY_LIST_DELIMITER,
        );
        let partition_keys = parse_list(
            source.get(options.partition_keys())?.as_deref(),
            KEY_LIST_DELIMITER,
        );

        let write_props = source.get(options.write_props())?.unwrap_or_default();

        debug!(
            catalog = identity.catalog_name(),
            table = %identity.identifier(),
            schema_save_mode = %schema_save_mode,
            data_save_mode = %data_save_mode,
            "resolved sink configuration"
        );

        Ok(Self {
            identity,
            schema_save_mode,
            data_save_mode,
            primary_keys,
            partition_keys,
            write_props,
        })
    }

    pub fn identity(&self) -> &TableIdentity {
        &self.identity
    }

    pub fn catalog_name(&self) -> &str {
        self.identity.catalog_name()
    }

    pub fn warehouse(&self) -> &str {
        self.identity.warehouse()
    }

    pub fn namespace(&self) -> &str {
        self.identity.namespace()
    }

    pub fn table(&self) -> &str {
        self.identity.table()
    }

    pub fn hdfs_site_path(&self) -> Option<&str> {
        self.identity.hdfs_site_path()
    }

    pub fn schema_save_mode(&self) -> SchemaSaveMode {
        self.schema_save_mode
    }

    pub fn data_save_mode(&self) -> DataSaveMode {
        self.data_save_mode
    }

    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    pub fn partition_keys(&self) -> &[String] {
        &self.partition_keys
    }

    /// Properties forwarded verbatim to table initialization.
    pub fn write_props(&self) -> &HashMap<String, String> {
        &self.write_props
    }
}
