//! Reads operation definitions and argument maps from disk.

use std::io::Read;
use std::path::Path;

use paramguard_core::{Arguments, OperationDefinition};
use serde_json::Value;

use crate::{Error, Result};

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

/// Whether `path` names stdin rather than a file.
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| Error::Read(path.to_path_buf(), e))
}

/// Load an operation definition from a JSON or YAML file.
pub fn load_definition(path: &Path) -> Result<OperationDefinition> {
    let source = read_source(path)?;
    let definition: OperationDefinition = if is_yaml(path) {
        serde_yaml::from_str(&source)?
    } else {
        serde_json::from_str(&source)?
    };
    log::debug!("Loaded definition from {}", path.display());
    Ok(definition)
}

/// Load an argument map from a JSON or YAML file (`-` for JSON on stdin).
pub fn load_arguments(path: &Path) -> Result<Arguments> {
    let source = read_source(path)?;
    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&source)?
    } else {
        serde_json::from_str(&source)?
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Custom(format!(
            "Arguments in {} must be an object, got {}",
            path.display(),
            type_name(&other)
        ))),
    }
}

/// Apply `KEY=VALUE` overrides; values that are not valid JSON become strings.
pub fn apply_overrides(arguments: &mut Arguments, overrides: &[(String, String)]) {
    for (key, raw) in overrides {
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
        arguments.insert(key.clone(), value);
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
