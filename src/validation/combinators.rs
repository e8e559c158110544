use super::Validator;
use super::invalid::{Invalid, check};
use super::schema::{SchemaInfo, keyword_location};
use crate::error::{OasGuardError, Result};
use serde_json::Value;

const KEYWORDS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

pub(crate) fn present(info: &SchemaInfo<'_>) -> bool {
    KEYWORDS.iter().any(|keyword| info.keyword(keyword).is_some())
}

/// `allOf` pools the invalids of every branch. `anyOf` and `oneOf` report a
/// single aggregate `Invalid` when the disjunction fails.
pub(crate) fn validate(
    validator: &Validator,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let mut invalids = Vec::new();

    if let Some(branches) = branches(location, info, "allOf")? {
        for branch in branches {
            invalids.extend(validator.dispatch(
                value,
                location,
                info.with_current(branch),
                depth + 1,
            )?);
        }
    }

    if let Some(branches) = branches(location, info, "anyOf")? {
        let mut matched = false;
        for branch in branches {
            if matches(validator, value, location, info.with_current(branch), depth)? {
                matched = true;
                break;
            }
        }
        tracing::debug!(location, matched, "anyOf evaluated");

        invalids.extend(check(matched, value, location, info.current, || {
            "Expected value to match at least one schema in anyOf".to_string()
        }));
    }

    if let Some(branches) = branches(location, info, "oneOf")? {
        let mut matched = 0;
        for branch in branches {
            if matches(validator, value, location, info.with_current(branch), depth)? {
                matched += 1;
            }
        }
        tracing::debug!(location, matched, "oneOf evaluated");

        invalids.extend(check(matched == 1, value, location, info.current, || {
            format!(
                "Expected value to match exactly one schema in oneOf but matched {}",
                matched
            )
        }));
    }

    Ok(invalids)
}

fn branches<'s>(
    location: &str,
    info: SchemaInfo<'s>,
    keyword: &str,
) -> Result<Option<&'s Vec<Value>>> {
    match info.keyword(keyword) {
        None => Ok(None),
        Some(Value::Array(branches)) if !branches.is_empty() => Ok(Some(branches)),
        Some(_) => Err(OasGuardError::schema(
            keyword_location(location, keyword),
            "must be a non-empty array",
        )),
    }
}

fn matches(
    validator: &Validator,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<bool> {
    Ok(validator
        .dispatch(value, location, info, depth + 1)?
        .is_empty())
}
