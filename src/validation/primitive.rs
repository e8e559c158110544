use super::global::validate_global;
use super::invalid::Invalid;
use super::schema::{SchemaInfo, SchemaKind};
use super::type_mismatch;
use crate::error::Result;
use serde_json::Value;

pub(crate) fn validate_boolean(
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
) -> Result<Vec<Invalid>> {
    validate_simple(SchemaKind::Boolean, value, location, info)
}

pub(crate) fn validate_null(
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
) -> Result<Vec<Invalid>> {
    validate_simple(SchemaKind::Null, value, location, info)
}

fn validate_simple(
    kind: SchemaKind,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
) -> Result<Vec<Invalid>> {
    match type_mismatch(kind, value, location, info) {
        Some(mismatch) => Ok(vec![mismatch]),
        None => validate_global(value, location, info),
    }
}
