use super::config::PropertyPresence;
use super::global::validate_global;
use super::invalid::{Invalid, check, child};
use super::schema::{SchemaInfo, SchemaKind, keyword_location, truthy};
use super::{Validator, type_mismatch};
use crate::error::{OasGuardError, Result};
use serde_json::{Map, Value};

/// Validates `object` schemas, and untyped schemas that fall back to them
pub(crate) fn validate(
    validator: &Validator,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let Some(object) = value.as_object() else {
        return Ok(type_mismatch(SchemaKind::Object, value, location, info)
            .into_iter()
            .collect());
    };

    let mut invalids = validate_global(value, location, info)?;
    let count = object.len();

    if let Some(min) = info.count("minProperties", location)? {
        invalids.extend(check(count >= min, value, location, info.current, || {
            format!("Expected object to have min properties of {} but had {}", min, count)
        }));
    }

    if let Some(max) = info.count("maxProperties", location)? {
        invalids.extend(check(count <= max, value, location, info.current, || {
            format!("Expected object to have max properties of {} but had {}", max, count)
        }));
    }

    invalids.extend(validate_required(value, object, location, info)?);

    let declared = declared_properties(location, info)?;
    if let Some(properties) = declared {
        invalids.extend(validate_properties(
            validator, object, properties, location, info, depth,
        )?);
    }
    invalids.extend(validate_additional(
        validator, value, object, declared, location, info, depth,
    )?);

    Ok(invalids)
}

fn declared_properties<'s>(
    location: &str,
    info: SchemaInfo<'s>,
) -> Result<Option<&'s Map<String, Value>>> {
    match info.keyword("properties") {
        None => Ok(None),
        Some(Value::Object(properties)) => Ok(Some(properties)),
        Some(_) => Err(OasGuardError::schema(
            keyword_location(location, "properties"),
            "must be an object",
        )),
    }
}

/// One aggregate `Invalid` listing every missing key
fn validate_required(
    value: &Value,
    object: &Map<String, Value>,
    location: &str,
    info: SchemaInfo<'_>,
) -> Result<Option<Invalid>> {
    let Some(required) = info.keyword("required") else {
        return Ok(None);
    };

    let malformed = || {
        OasGuardError::schema(
            keyword_location(location, "required"),
            "must be an array of strings",
        )
    };

    let mut missing = Vec::new();
    for key in required.as_array().ok_or_else(malformed)? {
        let key = key.as_str().ok_or_else(malformed)?;
        if !object.contains_key(key) {
            missing.push(key);
        }
    }

    Ok(check(missing.is_empty(), value, location, info.current, || {
        format!(
            "Expected the following keys that were not present: [{}]",
            missing.join(", ")
        )
    }))
}

/// Walks the keys declared in `properties`, not the keys present in the value
fn validate_properties(
    validator: &Validator,
    object: &Map<String, Value>,
    properties: &Map<String, Value>,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let mut invalids = Vec::new();

    for (key, schema) in properties {
        let Some(property) = object.get(key) else {
            continue;
        };
        if validator.config().property_presence == PropertyPresence::Truthy && !truthy(property) {
            continue;
        }

        invalids.extend(validator.dispatch(
            property,
            &child(location, key),
            info.with_current(schema),
            depth + 1,
        )?);
    }

    Ok(invalids)
}

fn validate_additional(
    validator: &Validator,
    value: &Value,
    object: &Map<String, Value>,
    declared: Option<&Map<String, Value>>,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let schema = match info.keyword("additionalProperties") {
        None | Some(Value::Bool(true)) => return Ok(Vec::new()),
        Some(schema @ (Value::Bool(false) | Value::Object(_))) => schema,
        Some(_) => {
            return Err(OasGuardError::schema(
                keyword_location(location, "additionalProperties"),
                "must be a boolean or a schema",
            ));
        }
    };

    let excess: Vec<&String> = object
        .keys()
        .filter(|key| declared.is_none_or(|properties| !properties.contains_key(key.as_str())))
        .collect();

    if schema.as_bool() == Some(false) {
        return Ok(check(excess.is_empty(), value, location, info.current, || {
            let keys: Vec<&str> = excess.iter().map(|key| key.as_str()).collect();
            format!(
                "Expected no additional properties but found the following: [{}]",
                keys.join(", ")
            )
        })
        .into_iter()
        .collect());
    }

    let mut invalids = Vec::new();
    for key in excess {
        invalids.extend(validator.dispatch(
            &object[key.as_str()],
            &child(location, key),
            info.with_current(schema),
            depth + 1,
        )?);
    }

    Ok(invalids)
}
