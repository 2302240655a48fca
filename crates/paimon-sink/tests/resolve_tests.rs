//! Integration tests for paimon-sink configuration resolution.

use std::fs;

use paimon_sink::config::{PARTITION_KEYS, PRIMARY_KEYS};
use paimon_sink::{
    ConfigError, ConfigPath, DataSaveMode, ReadonlyConfig, SchemaSaveMode, SinkConfig, SinkOptions,
    load_from_paths, parse_list,
};

fn identity_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("catalog_name", "paimon"),
        ("warehouse", "hdfs:///tmp/paimon"),
        ("database", "sales"),
        ("table", "orders"),
    ]
}

mod list_parsing {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(parse_list(Some("a,b, c"), ","), vec!["a", "b", "c"]);
        assert!(parse_list(None, ",").is_empty());
        assert!(parse_list(Some(""), ",").is_empty());
    }

    #[test]
    fn test_order_and_trim_over_many_inputs() {
        let tokens = ["id", "user id", "dt", "region", "id"];
        for n in 1..=tokens.len() {
            let expected: Vec<String> = tokens[..n].iter().map(|t| t.to_string()).collect();
            let padded = tokens[..n]
                .iter()
                .map(|t| format!("  {t}\t"))
                .collect::<Vec<_>>()
                .join(",");
            assert_eq!(parse_list(Some(padded.as_str()), ","), expected);
        }
    }
}

mod resolution {
    use super::*;

    #[test]
    fn test_missing_catalog_name_constructs_nothing() {
        let source: ReadonlyConfig = identity_pairs()
            .into_iter()
            .filter(|(k, _)| *k != "catalog_name")
            .collect();
        let result = SinkConfig::resolve(&source);
        match result {
            Err(ConfigError::MissingRequiredField { field, key }) => {
                assert_eq!(field, "catalog_name");
                assert_eq!(key, "catalog_name");
            }
            other => panic!("expected missing catalog_name, got {other:?}"),
        }
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for (field, key) in [
            ("catalog_name", "catalog_name"),
            ("warehouse", "warehouse"),
            ("namespace", "database"),
            ("table", "table"),
        ] {
            let source: ReadonlyConfig = identity_pairs()
                .into_iter()
                .filter(|(k, _)| *k != key)
                .collect();
            let err = SinkConfig::resolve(&source).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingRequiredField { field: f, key: k } if f == field && k == key),
                "unexpected error for {key}: {err}"
            );
        }
    }

    #[test]
    fn test_fully_specified_with_defaults() {
        let source: ReadonlyConfig = identity_pairs().into_iter().collect();
        let config = SinkConfig::resolve(&source).unwrap();
        assert_eq!(config.catalog_name(), "paimon");
        assert_eq!(config.warehouse(), "hdfs:///tmp/paimon");
        assert_eq!(config.namespace(), "sales");
        assert_eq!(config.table(), "orders");
        assert_eq!(config.schema_save_mode(), SchemaSaveMode::CreateSchemaWhenNotExist);
        assert_eq!(config.data_save_mode(), DataSaveMode::AppendData);
        assert!(config.primary_keys().is_empty());
        assert!(config.partition_keys().is_empty());
        assert!(config.write_props().is_empty());
    }

    #[test]
    fn test_key_lists_from_pairs() {
        let mut pairs = identity_pairs();
        pairs.push((PRIMARY_KEYS, "order_id,dt"));
        pairs.push((PARTITION_KEYS, "dt"));
        let config = SinkConfig::resolve(&pairs.into_iter().collect()).unwrap();
        assert_eq!(config.primary_keys(), ["order_id", "dt"]);
        assert_eq!(config.partition_keys(), ["dt"]);
    }

    #[test]
    fn test_idempotent() {
        let source: ReadonlyConfig = identity_pairs().into_iter().collect();
        assert_eq!(
            SinkConfig::resolve(&source).unwrap(),
            SinkConfig::resolve(&source).unwrap()
        );
    }

    #[test]
    fn test_explicit_registry() {
        let options = SinkOptions::new().unwrap();
        let source: ReadonlyConfig = identity_pairs().into_iter().collect();
        assert_eq!(
            SinkConfig::resolve_with(&options, &source).unwrap(),
            SinkConfig::resolve(&source).unwrap()
        );
    }

    #[test]
    fn test_concurrent_resolution() {
        let source: ReadonlyConfig = identity_pairs().into_iter().collect();
        let expected = SinkConfig::resolve(&source).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| SinkConfig::resolve(&source).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

mod files {
    use super::*;

    #[test]
    fn test_resolve_from_split_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("00-identity.yaml"),
            "catalog_name: paimon\nwarehouse: file:///tmp/lake\ndatabase: sales\ntable: orders\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("10-table.yaml"),
            r#"
schema_save_mode: recreate_schema
data_save_mode: ERROR_WHEN_DATA_EXISTS
paimon.table.primary-keys: "order_id, dt"
paimon.table.partition-keys: dt
paimon.table.write-props:
  bucket: 4
  file.format: orc
"#,
        )
        .unwrap();

        let source = load_from_paths(&[ConfigPath::dir(dir.path())]).unwrap();
        let config = SinkConfig::resolve(&source).unwrap();
        assert_eq!(config.identity().identifier(), "sales.orders");
        assert_eq!(config.schema_save_mode(), SchemaSaveMode::RecreateSchema);
        assert_eq!(config.data_save_mode(), DataSaveMode::ErrorWhenDataExists);
        assert_eq!(config.primary_keys(), ["order_id", "dt"]);
        assert_eq!(config.partition_keys(), ["dt"]);
        assert_eq!(config.write_props()["bucket"], "4");
        assert_eq!(config.write_props()["file.format"], "orc");
    }

    #[test]
    fn test_override_file_replaces_table() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        let overlay = dir.path().join("overlay.yaml");
        fs::write(
            &base,
            "catalog_name: c\nwarehouse: /w\ndatabase: d\ntable: staging_orders\n",
        )
        .unwrap();
        fs::write(&overlay, "table: orders\n").unwrap();

        let source = load_from_paths(&[ConfigPath::file(&base), ConfigPath::file(&overlay)]).unwrap();
        assert_eq!(SinkConfig::resolve(&source).unwrap().table(), "orders");
    }
}
