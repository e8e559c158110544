use super::global::validate_global;
use super::invalid::{Invalid, check, child};
use super::schema::{SchemaInfo, SchemaKind, json_eq, truthy};
use super::{Validator, type_mismatch};
use crate::error::Result;
use serde_json::Value;

pub(crate) fn validate(
    validator: &Validator,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let Some(items) = value.as_array() else {
        return Ok(type_mismatch(SchemaKind::Array, value, location, info)
            .into_iter()
            .collect());
    };

    let mut invalids = validate_global(value, location, info)?;
    invalids.extend(validate_items(validator, items, location, info, depth)?);
    invalids.extend(validate_contains(validator, value, items, location, info, depth)?);

    if info.keyword("uniqueItems").is_some_and(truthy) {
        invalids.extend(check(all_unique(items), value, location, info.current, || {
            "Expected array items to all be unique".to_string()
        }));
    }

    if let Some(max) = info.count("maxItems", location)? {
        invalids.extend(check(items.len() <= max, value, location, info.current, || {
            format!("Expected array to have length less than or equal to {}", max)
        }));
    }

    if let Some(min) = info.count("minItems", location)? {
        invalids.extend(check(items.len() >= min, value, location, info.current, || {
            format!("Expected array to have length greater than or equal to {}", min)
        }));
    }

    Ok(invalids)
}

/// `items` as a single schema, or as positional schemas followed by `additionalItems`
fn validate_items(
    validator: &Validator,
    items: &[Value],
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Vec<Invalid>> {
    let mut invalids = Vec::new();

    match info.keyword("items") {
        None => {}
        Some(Value::Array(positional)) => {
            for (index, (item, schema)) in items.iter().zip(positional).enumerate() {
                invalids.extend(validator.dispatch(
                    item,
                    &child(location, index),
                    info.with_current(schema),
                    depth + 1,
                )?);
            }

            if let Some(extra) = info.keyword("additionalItems").filter(|s| s.is_object()) {
                for (index, item) in items.iter().enumerate().skip(positional.len()) {
                    invalids.extend(validator.dispatch(
                        item,
                        &child(location, index),
                        info.with_current(extra),
                        depth + 1,
                    )?);
                }
            }
        }
        Some(schema) => {
            for (index, item) in items.iter().enumerate() {
                invalids.extend(validator.dispatch(
                    item,
                    &child(location, index),
                    info.with_current(schema),
                    depth + 1,
                )?);
            }
        }
    }

    Ok(invalids)
}

fn validate_contains(
    validator: &Validator,
    value: &Value,
    items: &[Value],
    location: &str,
    info: SchemaInfo<'_>,
    depth: usize,
) -> Result<Option<Invalid>> {
    let Some(schema) = info.keyword("contains") else {
        return Ok(None);
    };

    for (index, item) in items.iter().enumerate() {
        let found = validator.dispatch(
            item,
            &child(location, index),
            info.with_current(schema),
            depth + 1,
        )?;
        if found.is_empty() {
            return Ok(None);
        }
    }

    Ok(check(false, value, location, info.current, || {
        "Expected array to contain at least one item complying with the contains schema".to_string()
    }))
}

fn all_unique(items: &[Value]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !json_eq(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: Value, schema: Value) -> Vec<Invalid> {
        Validator::default().validate(&value, &schema, None).unwrap()
    }

    #[test]
    fn test_array_type() {
        let schema = json!({"type": "array"});
        assert!(run(json!([]), schema.clone()).is_empty());
        assert_eq!(run(json!({"0": 1}), schema)[0].message, "Expected value to be an array");
    }

    #[test]
    fn test_unique_items_follows_truthiness() {
        let duplicates = json!([1, 1]);
        assert_eq!(run(duplicates.clone(), json!({"type": "array", "uniqueItems": 1})).len(), 1);
        assert_eq!(run(duplicates.clone(), json!({"type": "array", "uniqueItems": "yes"})).len(), 1);
        assert!(run(duplicates.clone(), json!({"type": "array", "uniqueItems": 0})).is_empty());
        assert!(run(duplicates, json!({"type": "array", "uniqueItems": false})).is_empty());
    }

    #[test]
    fn test_single_items_schema() {
        let schema = json!({"type": "array", "items": {"type": "string"}});
        assert!(run(json!(["a", "b"]), schema.clone()).is_empty());

        let invalids = run(json!(["a", 2, "c", false]), schema);
        let locations: Vec<&str> = invalids.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, ["#/1", "#/3"]);
    }

    #[test]
    fn test_tuple_items() {
        let schema = json!({"type": "array", "items": [{"type": "string"}, {"type": "number"}]});
        assert!(run(json!(["x", 5]), schema.clone()).is_empty());
        assert!(run(json!(["x"]), schema.clone()).is_empty());
        assert!(run(json!(["x", 5, null]), schema.clone()).is_empty());

        let invalids = run(json!(["x", "y"]), schema);
        assert_eq!(invalids.len(), 1);
        assert_eq!(invalids[0].location, "#/1");
        assert_eq!(invalids[0].message, "Expected value to be a number");
    }

    #[test]
    fn test_additional_items() {
        let schema = json!({
            "type": "array",
            "items": [{"type": "string"}],
            "additionalItems": {"type": "boolean"}
        });
        assert!(run(json!(["x", true, false]), schema.clone()).is_empty());

        let invalids = run(json!(["x", true, 3]), schema);
        assert_eq!(invalids.len(), 1);
        assert_eq!(invalids[0].location, "#/2");
    }

    #[test]
    fn test_contains() {
        let schema = json!({"type": "array", "contains": {"type": "integer", "minimum": 10}});
        assert!(run(json!([1, 2, 30]), schema.clone()).is_empty());

        let invalids = run(json!([1, 2, "30"]), schema.clone());
        assert_eq!(invalids.len(), 1);
        assert_eq!(invalids[0].location, "#");
        assert_eq!(
            invalids[0].message,
            "Expected array to contain at least one item complying with the contains schema"
        );

        assert_eq!(run(json!([]), schema).len(), 1);
    }

    #[test]
    fn test_contains_resolves_refs() {
        let schema = json!({
            "type": "array",
            "contains": {"$ref": "#/definitions/Flag"},
            "definitions": {"Flag": {"type": "boolean"}}
        });
        assert!(run(json!([1, true]), schema).is_empty());
    }

    #[test]
    fn test_unique_items() {
        let schema = json!({"type": "array", "uniqueItems": true});
        assert!(run(json!([1, "1", [1], {"a": 1}]), schema.clone()).is_empty());

        let invalids = run(json!([{"a": 1}, 2, {"a": 1.0}, 2]), schema);
        assert_eq!(invalids.len(), 1);
        assert_eq!(invalids[0].message, "Expected array items to all be unique");

        let relaxed = json!({"type": "array", "uniqueItems": false});
        assert!(run(json!([1, 1]), relaxed).is_empty());
    }

    #[test]
    fn test_item_counts() {
        let schema = json!({"type": "array", "minItems": 1, "maxItems": 2});
        assert!(run(json!([1]), schema.clone()).is_empty());
        assert_eq!(
            run(json!([]), schema.clone())[0].message,
            "Expected array to have length greater than or equal to 1"
        );
        assert_eq!(
            run(json!([1, 2, 3]), schema)[0].message,
            "Expected array to have length less than or equal to 2"
        );
    }

    #[test]
    fn test_malformed_count() {
        let schema = json!({"type": "array", "maxItems": -1});
        let err = Validator::default().validate(&json!([]), &schema, None).unwrap_err();
        assert_eq!(err.to_string(), "Schema error at #/maxItems: must be a non-negative integer");
    }
}
