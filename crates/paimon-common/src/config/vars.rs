//! Environment variable interpolation for config files.
//!
//! Supported syntax:
//! - `$VAR` or `${VAR}`: substitute, error if unset
//! - `${VAR:-default}`: default when VAR is unset or empty
//! - `${VAR-default}`: default only when VAR is unset
//! - `$$`: literal `$`

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ConfigError;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \$\$
        |
        \$\{
            (?P<braced>[A-Za-z_][A-Za-z0-9_]*)
            (?:(?P<op>:?-)(?P<default>[^}]*))?
        \}
        |
        \$(?P<bare>[A-Za-z_][A-Za-z0-9_]*)
        ",
    )
    .expect("Invalid regex pattern")
});

/// Interpolate against the process environment.
pub fn interpolate(input: &str) -> Result<String, ConfigError> {
    interpolate_with(input, |name| std::env::var(name).ok())
}

/// Interpolate using `lookup` to resolve variable names.
///
/// Every problem is collected before failing so all missing variables are
/// reported in one error.
pub fn interpolate_with<F>(input: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut errors = Vec::new();

    let text = ENV_VAR_PATTERN.replace_all(input, |caps: &Captures| {
        let Some(name) = caps.name("braced").or_else(|| caps.name("bare")) else {
            return "$".to_string();
        };
        let name = name.as_str();
        let unset_only = caps.name("op").is_some_and(|op| op.as_str() == "-");
        let default = caps.name("default").map(|m| m.as_str());

        match (lookup(name), default) {
            (Some(value), _) if value.contains(['\n', '\r']) => {
                errors.push(format!(
                    "environment variable '{name}' contains newlines, which is not allowed"
                ));
                caps[0].to_string()
            }
            (Some(value), Some(default)) if value.is_empty() && !unset_only => default.to_string(),
            (Some(value), _) => value,
            (None, Some(default)) => default.to_string(),
            (None, None) => {
                errors.push(format!("environment variable '{name}' is not set"));
                caps[0].to_string()
            }
        }
    });

    if errors.is_empty() {
        Ok(text.into_owned())
    } else {
        Err(ConfigError::EnvInterpolation {
            message: errors.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_bare_and_braced() {
        let lookup = env(&[("WAREHOUSE", "s3://lake"), ("DB", "sales")]);
        let text = interpolate_with("warehouse: $WAREHOUSE\ndatabase: ${DB}", lookup).unwrap();
        assert_eq!(text, "warehouse: s3://lake\ndatabase: sales");
    }

    #[test]
    fn test_defaults() {
        let lookup = env(&[("EMPTY", "")]);
        assert_eq!(
            interpolate_with("${MISSING:-x} ${MISSING-y}", &lookup).unwrap(),
            "x y"
        );
        assert_eq!(interpolate_with("[${EMPTY:-x}]", &lookup).unwrap(), "[x]");
        assert_eq!(interpolate_with("[${EMPTY-x}]", &lookup).unwrap(), "[]");
    }

    #[test]
    fn test_all_missing_reported() {
        let err = interpolate_with("$A ${B}", env(&[])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'A' is not set"));
        assert!(message.contains("'B' is not set"));
    }

    #[test]
    fn test_newline_rejected() {
        let err = interpolate_with("$V", env(&[("V", "a\nb")])).unwrap_err();
        assert!(err.to_string().contains("newlines"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(interpolate_with("cost: $$5", env(&[])).unwrap(), "cost: $5");
    }
}
