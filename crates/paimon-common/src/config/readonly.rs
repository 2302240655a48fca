//! Immutable, typed key-value configuration snapshot.

use std::path::Path;

use indexmap::IndexMap;
use serde_yaml::Value;
use tracing::debug;

use crate::config::option::{ConfigOption, OptionType, scalar_to_string};
use crate::config::{is_yaml_file, vars};
use crate::error::ConfigError;

/// A read-only snapshot of raw configuration values keyed by option key.
///
/// Values are kept as parsed YAML and only coerced when read through a
/// [`ConfigOption`]. A YAML `null` is treated the same as an absent key.
///
/// # Examples
///
/// ```
/// use paimon_common::config::{ConfigOption, ReadonlyConfig};
///
/// let table: ConfigOption<String> = ConfigOption::new("table");
/// let config: ReadonlyConfig = [("table", "orders")].into_iter().collect();
/// assert_eq!(config.get(&table).unwrap().as_deref(), Some("orders"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadonlyConfig {
    values: IndexMap<String, Value>,
}

impl ReadonlyConfig {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document after interpolating environment variables.
    ///
    /// The document must be a mapping from option key to value.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let text = vars::interpolate(contents)?;
        let value: Value =
            serde_yaml::from_str(&text).map_err(|source| ConfigError::YamlParse { source })?;
        Self::from_yaml_value(value)
    }

    /// Build a snapshot from an already parsed YAML document.
    pub fn from_yaml_value(value: Value) -> Result<Self, ConfigError> {
        let mapping = match value {
            // An empty document sets nothing.
            Value::Null => return Ok(Self::new()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(ConfigError::InvalidDocument {
                    message: format!("expected a mapping of option keys, found {other:?}"),
                });
            }
        };

        let mut values = IndexMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Some(key) = scalar_to_string(&key) else {
                return Err(ConfigError::InvalidDocument {
                    message: format!("option keys must be scalars, found {key:?}"),
                });
            };
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    /// Load a single YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !is_yaml_file(path) {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile { source })?;
        Self::parse(&contents)
    }

    /// Read an option.
    ///
    /// Returns the stored value coerced to `T`, else the option's default,
    /// else `None`. Coercion failures are returned as
    /// [`ConfigError::TypeCoercion`].
    pub fn get<T: OptionType>(&self, option: &ConfigOption<T>) -> Result<Option<T>, ConfigError> {
        match self.get_raw(option.key()) {
            Some(raw) => T::from_value(option.key(), raw).map(Some),
            None => Ok(option.default_value().cloned()),
        }
    }

    /// The raw value stored under `key`, ignoring explicit nulls.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_raw(key).is_some()
    }

    /// Keys in the order they were first set.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` onto this snapshot; keys in `other` win.
    ///
    /// An explicit null in `other` never unsets a value set earlier.
    pub(crate) fn merge(&mut self, other: Self) {
        for (key, value) in other.values {
            if value.is_null() && self.contains_key(&key) {
                debug!(key = %key, "ignoring null override of config key");
                continue;
            }
            let previous = self.values.insert(key.clone(), value);
            if previous.is_some_and(|previous| !previous.is_null()) {
                debug!(key = %key, "config key overridden by later source");
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ReadonlyConfig
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
