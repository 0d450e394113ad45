use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Serialize the default configuration as a YAML mapping.
fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}

/// Walk `defaults` and collect dotted paths of keys absent from `current`.
fn collect_missing(current: &Mapping, defaults: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let Some(name) = key.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match current.get(key) {
            None => out.push(path),
            Some(cur) => {
                if let (Some(cur_map), Some(def_map)) = (cur.as_mapping(), default_val.as_mapping())
                {
                    collect_missing(cur_map, def_map, &path, out);
                }
            }
        }
    }
}

/// Insert every key from `defaults` missing in `current`, recursing into nested mappings.
fn fill_missing(current: &mut Mapping, defaults: &Mapping) -> usize {
    let mut added = 0;
    for (key, default_val) in defaults {
        if !current.contains_key(key) {
            current.insert(key.clone(), default_val.clone());
            added += 1;
            continue;
        }

        if let Some(cur_map) = current.get_mut(key).and_then(Value::as_mapping_mut)
            && let Some(def_map) = default_val.as_mapping()
        {
            added += fill_missing(cur_map, def_map);
        }
    }
    added
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Return the dotted names of configuration fields missing from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut missing = Vec::new();
    collect_missing(&current, &defaults, "", &mut missing);
    Ok(missing)
}

/// Add missing fields with their default values.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let added = fill_missing(&mut current, &defaults);
    if added == 0 {
        info("Configuration already up to date.");
        return Ok(false);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated: {added} field(s) added to {}",
        path.display()
    ));
    Ok(true)
}
