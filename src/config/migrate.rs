//! Keep an existing configuration file in step with the current `Config`.
//!
//! Older files may lack sections added later (`chat`, `email`, `device`...).
//! Values already present are never touched, missing keys get their default.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn parse(content: &str) -> AppResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid configuration file: {}", e)))
}

fn defaults() -> AppResult<Value> {
    serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("cannot serialize defaults: {}", e)))
}

/// Dotted names of every default key absent from `current`.
fn collect_missing(current: &Mapping, defaults: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, def) in defaults {
        let Some(name) = key.as_str() else { continue };
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };
        match (current.get(key), def) {
            (None, _) => out.push(dotted),
            (Some(Value::Mapping(cur)), Value::Mapping(d)) => {
                collect_missing(cur, d, &dotted, out)
            }
            _ => {}
        }
    }
}

/// Insert every missing default key into `current`.
fn fill_missing(current: &mut Mapping, defaults: &Mapping) {
    for (key, def) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), def.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(d) = def {
                    fill_missing(cur, d);
                }
            }
            Some(_) => {}
        }
    }
}

/// Keys the YAML text is missing compared to the defaults.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse(content)?;
    let defaults = defaults()?;

    let mut out = Vec::new();
    if let (Value::Mapping(cur), Value::Mapping(def)) = (&current, &defaults) {
        collect_missing(cur, def, "", &mut out);
    } else {
        return Err(AppError::Config(
            "configuration file is not a YAML mapping".to_string(),
        ));
    }
    Ok(out)
}

/// Return the YAML text with missing keys filled in, and the keys added.
pub fn complete(content: &str) -> AppResult<(String, Vec<String>)> {
    let added = missing_keys(content)?;
    let mut current = parse(content)?;
    let defaults = defaults()?;

    if let (Value::Mapping(cur), Value::Mapping(def)) = (&mut current, &defaults) {
        fill_missing(cur, def);
    }

    let yaml = serde_yaml::to_string(&current)
        .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))?;
    Ok((yaml, added))
}

/// Rewrite the configuration file at `path` in place. Returns the keys added.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    let (yaml, added) = complete(&content)?;
    if !added.is_empty() {
        fs::write(path, yaml)?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_nested_missing_keys() {
        let yaml = "database: /tmp/a.sqlite\nlanguage: en\ncurrency_symbol: '€'\nchat:\n  model: m\n";
        let missing = missing_keys(yaml).unwrap();
        assert!(missing.contains(&"chat.endpoint".to_string()));
        assert!(missing.contains(&"email".to_string()));
        assert!(missing.contains(&"device".to_string()));
        assert!(!missing.contains(&"database".to_string()));
        assert!(!missing.contains(&"chat.model".to_string()));
    }

    #[test]
    fn complete_keeps_existing_values() {
        let yaml = "database: /tmp/a.sqlite\ncurrency_symbol: '€'\n";
        let (out, added) = complete(yaml).unwrap();
        assert!(added.contains(&"language".to_string()));

        let cfg = Config::from_yaml(&out).unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.currency_symbol, "€");
        assert!(missing_keys(&out).unwrap().is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(matches!(missing_keys("just text"), Err(AppError::Config(_))));
    }
}
