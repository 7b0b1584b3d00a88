//! Configuration file upgrades: detect fields added after the file was
//! written and fill them in with their defaults, keeping existing values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Documentation injected after a field when the migration adds it.
fn field_comment(field: &str) -> Option<&'static str> {
    match field {
        "date_format" => Some("# date_format: chrono strftime pattern for \"Started on ...\""),
        "progress_target_days" => Some("# progress_target_days: days needed to fill the progress bar"),
        "show_quote" => Some("# show_quote: print a motivational quote under the status card"),
        _ => None,
    }
}

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("serialize defaults: {}", e)))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration is not a YAML mapping".into())),
    }
}

/// Names of the known fields absent from `content`, in declaration order.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field with its default value. Returns the new file
/// content and the names of the fields that were added.
pub fn migrate_content(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut current = parse_mapping(content)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(e.to_string()))?;

    let mut out = String::new();
    for line in serialized.lines() {
        out.push_str(line);
        out.push('\n');

        if let Some((key, _)) = line.split_once(':')
            && added.iter().any(|a| a == key)
            && let Some(comment) = field_comment(key)
        {
            out.push_str(comment);
            out.push('\n');
        }
    }

    Ok((out, added))
}

/// Migrate the configuration file at `path` in place.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (new_content, added) = migrate_content(&content)?;

    if !added.is_empty() {
        fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_missing_fields() {
        let missing = missing_fields("database: /tmp/a.sqlite\nshow_quote: false\n").unwrap();
        assert_eq!(missing, vec!["date_format", "progress_target_days"]);
    }

    #[test]
    fn complete_file_needs_nothing() {
        let full = Config::default().to_yaml().unwrap();
        assert!(missing_fields(&full).unwrap().is_empty());
        let (_, added) = migrate_content(&full).unwrap();
        assert!(added.is_empty());
    }

    #[test]
    fn migration_keeps_existing_values() {
        let (content, added) =
            migrate_content("database: /tmp/a.sqlite\nprogress_target_days: 90\n").unwrap();

        assert_eq!(added, vec!["date_format", "show_quote"]);
        assert!(content.contains("# show_quote:"));

        let cfg = Config::from_yaml(&content).unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.progress_target_days, 90);
        assert!(cfg.show_quote);
    }

    #[test]
    fn migrate_file_rewrites_in_place() {
        let path = std::env::temp_dir().join("rstreak_config_migrate_test.conf");
        fs::write(&path, "database: /tmp/b.sqlite\n").unwrap();

        let added = migrate_file(&path).unwrap();
        assert_eq!(added.len(), 3);
        assert!(missing_fields(&fs::read_to_string(&path).unwrap())
            .unwrap()
            .is_empty());

        fs::remove_file(&path).ok();
    }
}
