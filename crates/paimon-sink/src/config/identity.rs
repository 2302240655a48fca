//! Table identity shared by every Paimon connector configuration.
//!
//! The identity options (catalog, warehouse, database, table and the
//! optional Hadoop site file) are declared here and resolved into a
//! [`TableIdentity`] that sink-specific configuration embeds by value.

use paimon_common::config::{ConfigOption, OptionRegistry, ReadonlyConfig};
use paimon_common::error::{ConfigError, MissingRequiredFieldSnafu};
use serde::Serialize;
use snafu::OptionExt;

pub const CATALOG_NAME: &str = "catalog_name";
pub const WAREHOUSE: &str = "warehouse";
pub const DATABASE: &str = "database";
pub const TABLE: &str = "table";
pub const HDFS_SITE_PATH: &str = "paimon.hdfs_site_path";

/// Options identifying the target table.
#[derive(Debug, Clone)]
pub struct IdentityOptions {
    catalog_name: ConfigOption<String>,
    warehouse: ConfigOption<String>,
    database: ConfigOption<String>,
    table: ConfigOption<String>,
    hdfs_site_path: ConfigOption<String>,
}

impl IdentityOptions {
    pub fn new() -> Self {
        Self {
            catalog_name: ConfigOption::new(CATALOG_NAME)
                .with_description("Name of the Paimon catalog"),
            warehouse: ConfigOption::new(WAREHOUSE)
                .with_description("Root path of the Paimon warehouse, e.g. hdfs:///tmp/paimon"),
            database: ConfigOption::new(DATABASE)
                .with_description("Database (namespace) that holds the table"),
            table: ConfigOption::new(TABLE).with_description("Name of the table to write"),
            hdfs_site_path: ConfigOption::new(HDFS_SITE_PATH)
                .with_description("Path to an hdfs-site.xml used to reach the warehouse"),
        }
    }

    pub fn catalog_name(&self) -> &ConfigOption<String> {
        &self.catalog_name
    }

    pub fn warehouse(&self) -> &ConfigOption<String> {
        &self.warehouse
    }

    pub fn database(&self) -> &ConfigOption<String> {
        &self.database
    }

    pub fn table(&self) -> &ConfigOption<String> {
        &self.table
    }

    pub fn hdfs_site_path(&self) -> &ConfigOption<String> {
        &self.hdfs_site_path
    }

    /// Required options paired with the field they populate, in check order.
    pub fn required(&self) -> [(&'static str, &ConfigOption<String>); 4] {
        [
            ("catalog_name", &self.catalog_name),
            ("warehouse", &self.warehouse),
            ("namespace", &self.database),
            ("table", &self.table),
        ]
    }

    pub(crate) fn register_into(&self, registry: &mut OptionRegistry) -> Result<(), ConfigError> {
        registry.register(&self.catalog_name)?;
        registry.register(&self.warehouse)?;
        registry.register(&self.database)?;
        registry.register(&self.table)?;
        registry.register(&self.hdfs_site_path)?;
        Ok(())
    }
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved identity of the table a connector works against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableIdentity {
    catalog_name: String,
    warehouse: String,
    namespace: String,
    table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hdfs_site_path: Option<String>,
}

impl TableIdentity {
    /// Resolve the identity, failing on the first required field that is absent.
    pub fn resolve(
        options: &IdentityOptions,
        source: &ReadonlyConfig,
    ) -> Result<Self, ConfigError> {
        let [catalog_name, warehouse, namespace, table] = options
            .required()
            .map(|(field, option)| require(source, field, option));
        Ok(Self {
            catalog_name: catalog_name?,
            warehouse: warehouse?,
            namespace: namespace?,
            table: table?,
            hdfs_site_path: source.get(&options.hdfs_site_path)?,
        })
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn warehouse(&self) -> &str {
        &self.warehouse
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn hdfs_site_path(&self) -> Option<&str> {
        self.hdfs_site_path.as_deref()
    }

    /// `namespace.table`, the identifier form catalogs use for lookups.
    pub fn identifier(&self) -> String {
        format!("{}.{}", self.namespace, self.table)
    }
}

fn require(
    source: &ReadonlyConfig,
    field: &'static str,
    option: &ConfigOption<String>,
) -> Result<String, ConfigError> {
    source.get(option)?.context(MissingRequiredFieldSnafu {
        field,
        key: option.key(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ReadonlyConfig {
        [
            (CATALOG_NAME, "paimon"),
            (WAREHOUSE, "file:///tmp/paimon"),
            (DATABASE, "sales"),
            (TABLE, "orders"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_identity() {
        let identity = TableIdentity::resolve(&IdentityOptions::new(), &full()).unwrap();
        assert_eq!(identity.catalog_name(), "paimon");
        assert_eq!(identity.warehouse(), "file:///tmp/paimon");
        assert_eq!(identity.namespace(), "sales");
        assert_eq!(identity.table(), "orders");
        assert_eq!(identity.hdfs_site_path(), None);
        assert_eq!(identity.identifier(), "sales.orders");
    }

    #[test]
    fn test_hdfs_site_path_read_as_is() {
        let mut config = ReadonlyConfig::parse(
            "catalog_name: c\nwarehouse: w\ndatabase: d\ntable: t\npaimon.hdfs_site_path: /etc/hadoop/hdfs-site.xml",
        )
        .unwrap();
        let identity = TableIdentity::resolve(&IdentityOptions::new(), &config).unwrap();
        assert_eq!(identity.hdfs_site_path(), Some("/etc/hadoop/hdfs-site.xml"));

        config = ReadonlyConfig::parse("catalog_name: c\nwarehouse: w\ndatabase: d\ntable: t").unwrap();
        let identity = TableIdentity::resolve(&IdentityOptions::new(), &config).unwrap();
        assert_eq!(identity.hdfs_site_path(), None);
    }

    #[test]
    fn test_namespace_reported_by_field_and_key() {
        let config: ReadonlyConfig = [(CATALOG_NAME, "c"), (WAREHOUSE, "w"), (TABLE, "t")]
            .into_iter()
            .collect();
        let err = TableIdentity::resolve(&IdentityOptions::new(), &config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredField {
                field: "namespace",
                key: "database"
            }
        ));
    }

    #[test]
    fn test_first_missing_field_wins() {
        let config: ReadonlyConfig = [(DATABASE, "d")].into_iter().collect();
        let err = TableIdentity::resolve(&IdentityOptions::new(), &config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredField {
                field: "catalog_name",
                ..
            }
        ));
    }

    #[test]
    fn test_each_required_option_reported() {
        let options = IdentityOptions::new();
        for (field, option) in options.required() {
            let config: ReadonlyConfig = [
                (CATALOG_NAME, "c"),
                (WAREHOUSE, "w"),
                (DATABASE, "d"),
                (TABLE, "t"),
            ]
            .into_iter()
            .filter(|(key, _)| *key != option.key())
            .collect();
            let err = TableIdentity::resolve(&options, &config).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingRequiredField { field: f, key } if f == field && key == option.key()),
                "unexpected error for {field}: {err}"
            );
        }
    }

    #[test]
    fn test_required_order() {
        let options = IdentityOptions::new();
        let fields: Vec<_> = options.required().iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec!["catalog_name", "warehouse", "namespace", "table"]);
    }
}
