use oasguard::loader::{component_schemas, load_document, schema_at};
use oasguard::{Validator, validate};
use serde_json::json;
use std::path::Path;

#[test]
fn test_load_petstore_fixture() {
    let path = Path::new("tests/fixtures/petstore.yaml");
    let document = load_document(path).expect("Failed to load petstore fixture");

    assert_eq!(document["info"]["title"], "Petstore API");
    assert_eq!(
        component_schemas(&document),
        ["Tag", "Pet", "NewPet", "Owner", "Person", "Shelter"]
    );
}

#[test]
fn test_valid_pet() {
    let document = load_document("tests/fixtures/petstore.yaml").unwrap();
    let schema = schema_at(&document, "NewPet").unwrap();

    let pet = json!({
        "id": 7,
        "name": "Rex",
        "status": "available",
        "tags": [{"name": "good"}, {"name": "dog"}],
        "owner": {"firstName": "Ada"}
    });

    let invalids = validate(&pet, schema, Some(&document)).unwrap();
    assert!(invalids.is_empty(), "unexpected invalids: {:?}", invalids);
}

#[test]
fn test_invalid_pet_reports_every_location() {
    let document = load_document("tests/fixtures/petstore.yaml").unwrap();
    let schema = schema_at(&document, "NewPet").unwrap();

    let pet = json!({
        "id": 0,
        "name": "rex",
        "status": "lost",
        "tags": [{"name": ""}, {"name": "x", "color": "red"}],
        "owner": {"shelterId": 3, "firstName": "Ada"},
        "age": 4
    });

    let invalids = validate(&pet, schema, Some(&document)).unwrap();
    let found: Vec<(&str, &str)> = invalids
        .iter()
        .map(|i| (i.location.as_str(), i.message.as_str()))
        .collect();

    assert_eq!(
        found,
        [
            ("#/id", "Expected value to be greater than or equal to 1"),
            ("#/name", "Expected value to match pattern /^[A-Z][a-z]+$/"),
            ("#/status", "Expected value to exactly one of [available, pending, sold]"),
            ("#/tags/0/name", "Expected value to have length greater than or equal to 1"),
            ("#/tags/1", "Expected no additional properties but found the following: [color]"),
            ("#/owner", "Expected value to match exactly one schema in oneOf but matched 2"),
            ("#", "Expected no additional properties but found the following: [age]"),
        ]
    );
}

#[test]
fn test_missing_required_keys_are_one_invalid() {
    let document = load_document("tests/fixtures/petstore.yaml").unwrap();
    let schema = schema_at(&document, "Pet").unwrap();

    let invalids = validate(&json!({}), schema, Some(&document)).unwrap();
    assert_eq!(invalids.len(), 1);
    assert_eq!(
        invalids[0].message,
        "Expected the following keys that were not present: [id, name]"
    );
}

#[test]
fn test_ref_round_trip() {
    let document = json!({
        "components": {"schemas": {
            "Abc": {
                "type": "object",
                "required": ["a"],
                "properties": {"a": {"type": "string"}}
            }
        }}
    });
    let schema = json!({"$ref": "#/components/schemas/Abc"});

    assert!(validate(&json!({"a": "x"}), &schema, Some(&document)).unwrap().is_empty());

    let invalids = validate(&json!({"a": 5}), &schema, Some(&document)).unwrap();
    assert_eq!(invalids.len(), 1);
    assert_eq!(invalids[0].location, "#/a");
    assert_eq!(invalids[0].message, "Expected value to be a string");
    assert_eq!(invalids[0].schema, json!({"type": "string"}));
    assert_eq!(invalids[0].value, json!(5));
}

#[test]
fn test_null_schema_accepts_only_null() {
    let schema = json!({"type": "null"});
    assert!(validate(&json!(null), &schema, None).unwrap().is_empty());

    for value in [json!(false), json!(0), json!(""), json!([]), json!({}), json!("null")] {
        assert!(!validate(&value, &schema, None).unwrap().is_empty());
    }
}

#[test]
fn test_integer_multiple_of() {
    for k in [1, 2, 3, 7] {
        let schema = json!({"type": "integer", "multipleOf": k});
        for v in -20i64..=20 {
            let invalids = validate(&json!(v), &schema, None).unwrap();
            assert_eq!(invalids.is_empty(), v % k == 0, "v={} k={}", v, k);
        }
    }
}

#[test]
fn test_additional_properties_names_extra_key() {
    let schema = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}},
        "additionalProperties": false
    });

    let invalids = validate(&json!({"a": "x", "b": 1}), &schema, None).unwrap();
    assert_eq!(invalids.len(), 1);
    assert!(invalids[0].message.contains("[b]"));
}

#[test]
fn test_tuple_items() {
    let schema = json!({"type": "array", "items": [{"type": "string"}, {"type": "number"}]});
    assert!(validate(&json!(["x", 5]), &schema, None).unwrap().is_empty());

    let invalids = validate(&json!(["x", "y"]), &schema, None).unwrap();
    assert_eq!(invalids.len(), 1);
    assert_eq!(invalids[0].location, "#/1");
}

#[test]
fn test_type_mismatch_short_circuits_keywords() {
    let schema = json!({"type": "number", "const": "x", "minimum": 3});
    let invalids = validate(&json!(false), &schema, None).unwrap();
    assert_eq!(invalids.len(), 1);
    assert_eq!(invalids[0].message, "Expected value to be a number");
}

#[test]
fn test_repeated_validation_is_identical() {
    let document = load_document("tests/fixtures/petstore.yaml").unwrap();
    let schema = schema_at(&document, "Pet").unwrap();
    let value = json!({"id": "7", "name": 3, "tags": [{"name": 1}, {"name": 1}]});

    let validator = Validator::default();
    let first = validator.validate(&value, schema, Some(&document)).unwrap();
    for _ in 0..5 {
        assert_eq!(validator.validate(&value, schema, Some(&document)).unwrap(), first);
    }
}

#[test]
fn test_schema_error_propagates() {
    let schema = json!({"type": "string", "maxLength": "ten"});
    let err = validate(&json!("abc"), &schema, None).unwrap_err();
    assert!(err.is_schema_error());

    let schema = json!({"$ref": "#/components/schemas/Missing"});
    let err = validate(&json!({}), &schema, None).unwrap_err();
    assert!(err.is_schema_error());
}

#[test]
fn test_validators_are_shareable_across_threads() {
    let schema = json!({"type": "array", "items": {"type": "integer"}});
    let validator = Validator::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let schema = &schema;
                scope.spawn(move || validator.validate(&json!([n, "x"]), schema, None).unwrap())
            })
            .collect();

        for handle in handles {
            let invalids = handle.join().unwrap();
            assert_eq!(invalids.len(), 1);
            assert_eq!(invalids[0].location, "#/1");
        }
    });
}
