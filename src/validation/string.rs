use super::global::validate_global;
use super::invalid::{Invalid, check};
use super::schema::{SchemaInfo, SchemaKind, keyword_location};
use super::type_mismatch;
use crate::error::{OasGuardError, Result};
use regex::Regex;
use serde_json::Value;

pub(crate) fn validate(value: &Value, location: &str, info: SchemaInfo<'_>) -> Result<Vec<Invalid>> {
    let Some(text) = value.as_str() else {
        return Ok(type_mismatch(SchemaKind::String, value, location, info)
            .into_iter()
            .collect());
    };

    let mut invalids = validate_global(value, location, info)?;
    let length = text.chars().count();

    if let Some(max) = info.count("maxLength", location)? {
        invalids.extend(check(length <= max, value, location, info.current, || {
            format!("Expected value to have length less than or equal to {}", max)
        }));
    }

    if let Some(min) = info.count("minLength", location)? {
        invalids.extend(check(length >= min, value, location, info.current, || {
            format!("Expected value to have length greater than or equal to {}", min)
        }));
    }

    if let Some(pattern) = info.keyword("pattern") {
        let source = pattern.as_str().ok_or_else(|| {
            OasGuardError::schema(keyword_location(location, "pattern"), "must be a string")
        })?;
        let regex = Regex::new(source).map_err(|e| {
            OasGuardError::schema(
                keyword_location(location, "pattern"),
                format!("invalid regular expression: {}", e),
            )
        })?;

        invalids.extend(check(regex.is_match(text), value, location, info.current, || {
            format!("Expected value to match pattern /{}/", source)
        }));
    }

    Ok(invalids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(value: Value, schema: Value) -> Vec<String> {
        validate(&value, "#", SchemaInfo::new(&schema, &schema))
            .unwrap()
            .into_iter()
            .map(|invalid| invalid.message)
            .collect()
    }

    #[test]
    fn test_string_type() {
        let schema = json!({"type": "string"});
        assert!(messages(json!("a string"), schema.clone()).is_empty());
        assert_eq!(messages(json!(false), schema.clone()), ["Expected value to be a string"]);
        assert_eq!(messages(json!(0), schema), ["Expected value to be a string"]);
    }

    #[test]
    fn test_lengths_count_characters() {
        let schema = json!({"type": "string", "maxLength": 3, "minLength": 2});
        assert!(messages(json!("héé"), schema.clone()).is_empty());
        assert_eq!(
            messages(json!("abcd"), schema.clone()),
            ["Expected value to have length less than or equal to 3"]
        );
        assert_eq!(
            messages(json!("a"), schema),
            ["Expected value to have length greater than or equal to 2"]
        );
    }

    #[test]
    fn test_zero_max_length() {
        let schema = json!({"type": "string", "maxLength": 0});
        assert!(messages(json!(""), schema.clone()).is_empty());
        assert_eq!(messages(json!("x"), schema).len(), 1);
    }

    #[test]
    fn test_pattern() {
        let schema = json!({"type": "string", "pattern": "^[a-z]+-\\d+$"});
        assert!(messages(json!("abc-12"), schema.clone()).is_empty());
        assert_eq!(
            messages(json!("ABC-12"), schema),
            ["Expected value to match pattern /^[a-z]+-\\d+$/"]
        );

        let unanchored = json!({"type": "string", "pattern": "b"});
        assert!(messages(json!("abc"), unanchored).is_empty());
    }

    #[test]
    fn test_malformed_keywords() {
        let value = json!("abc");

        let schema = json!({"type": "string", "maxLength": "3"});
        let err = validate(&value, "#/name", SchemaInfo::new(&schema, &schema)).unwrap_err();
        assert_eq!(err.to_string(), "Schema error at #/name/maxLength: must be a number");

        let schema = json!({"type": "string", "pattern": "(unclosed"});
        let err = validate(&value, "#", SchemaInfo::new(&schema, &schema)).unwrap_err();
        assert!(err.to_string().starts_with("Schema error at #/pattern: invalid regular expression"));
    }
}
