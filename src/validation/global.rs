use super::invalid::{Invalid, check};
use super::schema::{SchemaInfo, json_eq, keyword_location, render};
use crate::error::{OasGuardError, Result};
use serde_json::Value;

/// Keywords valid on every kind: `const` then `enum`
pub(crate) fn validate_global(
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
) -> Result<Vec<Invalid>> {
    let mut invalids = Vec::new();

    if let Some(expected) = info.keyword("const") {
        invalids.extend(check(
            json_eq(value, expected),
            value,
            location,
            info.current,
            || format!("Expected value to exactly equal {}", render(expected)),
        ));
    }

    if let Some(options) = info.keyword("enum") {
        let Value::Array(options) = options else {
            return Err(OasGuardError::schema(
                keyword_location(location, "enum"),
                "must be an array",
            ));
        };

        invalids.extend(check(
            options.iter().any(|option| json_eq(value, option)),
            value,
            location,
            info.current,
            || {
                let listed: Vec<String> = options.iter().map(render).collect();
                format!("Expected value to exactly one of [{}]", listed.join(", "))
            },
        ));
    }

    Ok(invalids)
}
