//! Configuration file upgrades: detect fields missing from an existing file
//! and rewrite it with their default values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in a serialized default config but absent from `current`.
fn missing_keys(current: &Mapping, defaults: &Mapping) -> Vec<String> {
    defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect()
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// List configuration fields missing from the file at `path`.
pub fn check_config_file(path: &Path) -> AppResult<Vec<String>> {
    Ok(missing_keys(&read_mapping(path)?, &default_mapping()?))
}

/// Add missing fields (with defaults) to the file at `path`, keeping every
/// existing value. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let added = missing_keys(&current, &defaults);

    if added.is_empty() {
        return Ok(added);
    }

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            current.insert(k, v);
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    Ok(added)
}
