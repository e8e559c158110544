use crate::error::{OasGuardError, Result};
use crate::validation::resolver::resolve_pointer;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load an OpenAPI or JSON-Schema document (YAML or JSON) as a schema tree
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();

    let document = read_yaml(path)?;
    if !document.is_object() {
        return Err(OasGuardError::DocumentLoadError(format!(
            "{}: document root must be a mapping",
            path.display()
        )));
    }

    check_openapi_version(&document)?;

    tracing::debug!(path = %path.display(), "document loaded");
    Ok(document)
}

/// Load an instance value (YAML or JSON) to be validated
pub fn load_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    read_yaml(path.as_ref())
}

fn read_yaml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        OasGuardError::DocumentLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    // YAML is a superset of JSON, so one parser covers both
    serde_yaml::from_str(&content).map_err(|e| {
        OasGuardError::DocumentLoadError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn check_openapi_version(document: &Value) -> Result<()> {
    let Some(version) = document.get("openapi") else {
        return Ok(());
    };

    match version.as_str() {
        Some(v) if v.starts_with("3.0") || v.starts_with("3.1") => Ok(()),
        _ => Err(OasGuardError::DocumentLoadError(format!(
            "Unsupported OpenAPI version: {}. Only 3.0.x and 3.1.x are supported.",
            version
        ))),
    }
}

/// Look up a schema by component name (`Pet`) or by pointer (`#/components/schemas/Pet`)
pub fn schema_at<'d>(document: &'d Value, name: &str) -> Result<&'d Value> {
    if name.starts_with('#') {
        return resolve_pointer(document, name)
            .map_err(|_| OasGuardError::SchemaNotFound(name.to_string()));
    }

    document
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(|s| s.get(name))
        .ok_or_else(|| OasGuardError::SchemaNotFound(name.to_string()))
}

/// Names of `components.schemas`, in document order
pub fn component_schemas(document: &Value) -> Vec<String> {
    document
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
        .map(|schemas| schemas.keys().cloned().collect())
        .unwrap_or_default()
}
