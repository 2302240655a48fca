//! Typed option descriptors and the option registry.
//!
//! A [`ConfigOption<T>`] names one configuration key together with the type
//! its raw value is coerced into, an optional default and a description.
//! An [`OptionRegistry`] collects the type-erased [`OptionDescriptor`] of
//! every option a component recognizes, so the resolver and documentation
//! tooling share the same list of keys.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::config::ReadonlyConfig;
use crate::error::ConfigError;

/// A type that option values can be coerced into.
pub trait OptionType: Clone {
    /// Human readable type name used in errors and option listings.
    const TYPE_NAME: &'static str;

    /// Coerce a raw (non-null) value stored under `key`.
    fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError>;

    /// Render a value for option listings.
    fn render(&self) -> String;
}

/// Render a scalar YAML value as text. Returns `None` for non-scalars.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

impl OptionType for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        scalar_to_string(value).ok_or_else(|| ConfigError::TypeCoercion {
            key: key.to_string(),
            expected: Self::TYPE_NAME,
            message: format!("found {}", kind_of(value)),
        })
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl OptionType for HashMap<String, String> {
    const TYPE_NAME: &'static str = "map<string, string>";

    fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        let Value::Mapping(mapping) = value else {
            return Err(ConfigError::TypeCoercion {
                key: key.to_string(),
                expected: Self::TYPE_NAME,
                message: format!("found {}", kind_of(value)),
            });
        };

        let mut props = HashMap::with_capacity(mapping.len());
        for (k, v) in mapping {
            let (Some(k), Some(v)) = (scalar_to_string(k), scalar_to_string(v)) else {
                return Err(ConfigError::TypeCoercion {
                    key: key.to_string(),
                    expected: Self::TYPE_NAME,
                    message: format!("entry {} => {} is not a scalar pair", kind_of(k), kind_of(v)),
                });
            };
            props.insert(k, v);
        }
        Ok(props)
    }

    fn render(&self) -> String {
        let mut entries: Vec<_> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        entries.sort();
        format!("{{{}}}", entries.join(", "))
    }
}

/// Decode an upper-case enum literal through the enum's serde derive.
///
/// String literals are trimmed and upper-cased first, so matching is
/// case-insensitive. Unknown literals fail with the variant list serde
/// reports.
pub fn decode_enum_literal<T: DeserializeOwned>(
    key: &str,
    value: &Value,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let normalized = match value {
        Value::String(literal) => Value::String(literal.trim().to_ascii_uppercase()),
        other => other.clone(),
    };
    serde_yaml::from_value(normalized).map_err(|e| ConfigError::TypeCoercion {
        key: key.to_string(),
        expected,
        message: e.to_string(),
    })
}

/// The literal a unit enum variant serializes to.
pub fn enum_literal<T: Serialize>(value: &T) -> String {
    match serde_yaml::to_value(value) {
        Ok(Value::String(literal)) => literal,
        Ok(other) => format!("{other:?}"),
        Err(e) => format!("<{e}>"),
    }
}

/// A named, typed configuration option.
///
/// # Examples
///
/// ```
/// use paimon_common::config::ConfigOption;
///
/// let warehouse: ConfigOption<String> = ConfigOption::new("warehouse")
///     .with_description("Root path of the warehouse");
/// assert_eq!(warehouse.key(), "warehouse");
/// assert!(warehouse.default_value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOption<T> {
    key: &'static str,
    default: Option<T>,
    description: &'static str,
}

impl<T: OptionType> ConfigOption<T> {
    /// Declare an option with no default and no description.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            default: None,
            description: "",
        }
    }

    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Type-erased view of this option.
    pub fn descriptor(&self) -> OptionDescriptor {
        OptionDescriptor {
            key: self.key,
            type_name: T::TYPE_NAME,
            default: self.default.as_ref().map(OptionType::render),
            description: self.description,
        }
    }
}

/// Type-erased description of a registered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub key: &'static str,
    pub type_name: &'static str,
    /// Rendered default value, if the option declares one.
    pub default: Option<String>,
    pub description: &'static str,
}

impl fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.type_name)?;
        if let Some(default) = &self.default {
            write!(f, " [default: {default}]")?;
        }
        Ok(())
    }
}

/// The set of options a component recognizes, keyed by option key.
///
/// Registration order is preserved for listings. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: IndexMap<&'static str, OptionDescriptor>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option, rejecting a key that is already present.
    pub fn register<T: OptionType>(&mut self, option: &ConfigOption<T>) -> Result<(), ConfigError> {
        if self.options.contains_key(option.key()) {
            return Err(ConfigError::DuplicateOptionKey {
                key: option.key().to_string(),
            });
        }
        self.options.insert(option.key(), option.descriptor());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&OptionDescriptor> {
        self.options.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Iterate over descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Keys present in `config` that no registered option declares.
    pub fn unknown_keys<'a>(&self, config: &'a ReadonlyConfig) -> Vec<&'a str> {
        config.keys().filter(|key| !self.contains(key)).collect()
    }
}
