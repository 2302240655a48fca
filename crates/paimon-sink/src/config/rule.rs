//! Required-option rules with aggregated validation.

use paimon_common::config::{ConfigOption, ReadonlyConfig};
use paimon_common::error::ConfigError;

/// Which options must resolve to a value.
#[derive(Debug, Clone)]
pub struct OptionRule {
    required: Vec<(&'static str, ConfigOption<String>)>,
}

impl OptionRule {
    /// Build a rule from `(field, option)` pairs in check order.
    pub fn new(required: impl IntoIterator<Item = (&'static str, ConfigOption<String>)>) -> Self {
        Self {
            required: required.into_iter().collect(),
        }
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required_keys().any(|required| required == key)
    }

    /// Keys of the required options, in check order.
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().map(|(_, option)| option.key())
    }

    /// Check every required option and report all problems at once.
    ///
    /// A single problem is returned as-is; several are combined into
    /// [`ConfigError::MultipleErrors`].
    pub fn validate(&self, source: &ReadonlyConfig) -> Result<(), ConfigError> {
        let mut problems: Vec<ConfigError> = self
            .required
            .iter()
            .filter_map(|(field, option)| match source.get(option) {
                Ok(Some(_)) => None,
                Ok(None) => Some(ConfigError::MissingRequiredField {
                    field: *field,
                    key: option.key(),
                }),
                Err(e) => Some(e),
            })
            .collect();

        match problems.len() {
            0 => Ok(()),
            1 => Err(problems.remove(0)),
            _ => Err(ConfigError::MultipleErrors {
                errors: problems.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}
