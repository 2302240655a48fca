//! Loading a configuration snapshot from several files and directories.

use std::path::Path;

use tracing::debug;

use crate::config::{ConfigPath, ReadonlyConfig, is_yaml_file};
use crate::error::ConfigError;

/// Load and merge every source in order; later sources override earlier keys.
///
/// Errors from individual sources are collected and returned together.
pub fn load_from_paths(paths: &[ConfigPath]) -> Result<ReadonlyConfig, ConfigError> {
    let mut config = ReadonlyConfig::new();
    let mut errors = Vec::new();

    for source in paths {
        let loaded = match source {
            ConfigPath::File(path) => ReadonlyConfig::from_file(path),
            ConfigPath::Dir(path) => load_dir(path),
        };
        match loaded {
            Ok(partial) => {
                debug!(path = %source.path().display(), keys = partial.len(), "loaded config source");
                config.merge(partial);
            }
            Err(e) => errors.push(format!("{}: {}", source.path().display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(ConfigError::MultipleErrors { errors });
    }
    Ok(config)
}

/// Load the YAML files of a directory in file name order.
fn load_dir(dir: &Path) -> Result<ReadonlyConfig, ConfigError> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .map_err(|source| ConfigError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_yaml_file(path))
        .collect();
    files.sort();

    let mut config = ReadonlyConfig::new();
    let mut errors = Vec::new();
    for path in files {
        match ReadonlyConfig::from_file(&path) {
            Ok(partial) => config.merge(partial),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(ConfigError::MultipleErrors { errors });
    }
    Ok(config)
}
