use super::global::validate_global;
use super::invalid::{Invalid, check};
use super::schema::{SchemaInfo, SchemaKind};
use super::type_mismatch;
use crate::error::Result;
use serde_json::Value;

type Predicate = fn(f64, f64) -> bool;
type Message = fn(f64) -> String;

/// Numeric keywords in evaluation order
const BOUNDS: [(&str, Predicate, Message); 5] = [
    (
        "multipleOf",
        |value, k| k > 0.0 && value % k == 0.0,
        |k| format!("Expected value to be a multiple of {k} and {k} to be greater than 0"),
    ),
    (
        "maximum",
        |value, k| value <= k,
        |k| format!("Expected value to be less than or equal to {k}"),
    ),
    (
        "exclusiveMaximum",
        |value, k| value < k,
        |k| format!("Expected value to be less than {k}"),
    ),
    (
        "minimum",
        |value, k| value >= k,
        |k| format!("Expected value to be greater than or equal to {k}"),
    ),
    (
        "exclusiveMinimum",
        |value, k| value > k,
        |k| format!("Expected value to be greater than {k}"),
    ),
];

/// Validates `number` and `integer` schemas
pub(crate) fn validate(value: &Value, location: &str, info: SchemaInfo<'_>) -> Result<Vec<Invalid>> {
    let kind = info.kind();
    let Some(number) = value.as_f64() else {
        return Ok(type_mismatch(kind, value, location, info).into_iter().collect());
    };

    let mut invalids = validate_global(value, location, info)?;

    invalids.extend(check(
        kind != SchemaKind::Integer || number.fract() == 0.0,
        value,
        location,
        info.current,
        || "Expected value to be an integer".to_string(),
    ));

    for (keyword, predicate, message) in BOUNDS {
        if let Some(bound) = info.number(keyword, location)? {
            invalids.extend(check(
                predicate(number, bound),
                value,
                location,
                info.current,
                || message(bound),
            ));
        }
    }

    Ok(invalids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: Value, schema: Value) -> Result<Vec<Invalid>> {
        validate(&value, "#", SchemaInfo::new(&schema, &schema))
    }

    fn messages(value: Value, schema: Value) -> Vec<String> {
        run(value, schema)
            .unwrap()
            .into_iter()
            .map(|invalid| invalid.message)
            .collect()
    }

    #[test]
    fn test_number_type() {
        let schema = json!({"type": "number"});
        assert!(messages(json!(0), schema.clone()).is_empty());
        assert!(messages(json!(-7600000), schema.clone()).is_empty());
        assert!(messages(json!(123.321), schema.clone()).is_empty());
        assert_eq!(messages(json!("a string"), schema.clone()), ["Expected value to be a number"]);
        assert_eq!(messages(json!(false), schema), ["Expected value to be a number"]);
    }

    #[test]
    fn test_integer_type() {
        let schema = json!({"type": "integer"});
        assert!(messages(json!(-7600000), schema.clone()).is_empty());
        assert!(messages(json!(4.0), schema.clone()).is_empty());
        assert_eq!(messages(json!(123.321), schema.clone()), ["Expected value to be an integer"]);
        assert_eq!(messages(json!(null), schema), ["Expected value to be a number"]);
    }

    #[test]
    fn test_multiple_of() {
        let schema = json!({"type": "integer", "multipleOf": 3});
        assert!(messages(json!(9), schema.clone()).is_empty());
        assert!(messages(json!(0), schema.clone()).is_empty());
        assert_eq!(
            messages(json!(10), schema),
            ["Expected value to be a multiple of 3 and 3 to be greater than 0"]
        );

        let non_positive = json!({"type": "integer", "multipleOf": 0});
        assert_eq!(messages(json!(0), non_positive).len(), 1);
    }

    #[test]
    fn test_bounds_accumulate() {
        let schema = json!({
            "type": "number",
            "maximum": 10,
            "exclusiveMaximum": 10,
            "minimum": 0,
            "exclusiveMinimum": 0
        });
        assert!(messages(json!(5), schema.clone()).is_empty());
        assert_eq!(messages(json!(10), schema.clone()), ["Expected value to be less than 10"]);
        assert_eq!(messages(json!(0), schema.clone()), ["Expected value to be greater than 0"]);
        assert_eq!(
            messages(json!(11.5), schema),
            [
                "Expected value to be less than or equal to 10",
                "Expected value to be less than 10"
            ]
        );
    }

    #[test]
    fn test_type_mismatch_short_circuits() {
        let schema = json!({"type": "integer", "const": 4, "minimum": 100});
        assert_eq!(messages(json!("4"), schema), ["Expected value to be a number"]);
    }

    #[test]
    fn test_global_runs_before_integer_check() {
        let schema = json!({"type": "integer", "const": 4});
        assert_eq!(
            messages(json!(1.5), schema),
            ["Expected value to exactly equal 4", "Expected value to be an integer"]
        );
    }

    #[test]
    fn test_malformed_keyword() {
        let err = run(json!(5), json!({"type": "number", "maximum": "10"})).unwrap_err();
        assert_eq!(err.to_string(), "Schema error at #/maximum: must be a number");
    }
}
