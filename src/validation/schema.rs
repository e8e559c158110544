use crate::error::{OasGuardError, Result};
use serde_json::{Number, Value};

/// Base kind declared by a schema's `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Array,
    Object,
    /// No `type`, a non-string `type`, or an unknown type name
    Untyped,
}

impl SchemaKind {
    pub fn of(schema: &Value) -> Self {
        match schema.get("type").and_then(Value::as_str) {
            Some("string") => SchemaKind::String,
            Some("number") => SchemaKind::Number,
            Some("integer") => SchemaKind::Integer,
            Some("boolean") => SchemaKind::Boolean,
            Some("null") => SchemaKind::Null,
            Some("array") => SchemaKind::Array,
            Some("object") => SchemaKind::Object,
            _ => SchemaKind::Untyped,
        }
    }

    /// Base-type predicate. `Integer` accepts any number; integrality is a keyword check.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            SchemaKind::String => value.is_string(),
            SchemaKind::Number | SchemaKind::Integer => value.is_number(),
            SchemaKind::Boolean => value.is_boolean(),
            SchemaKind::Null => value.is_null(),
            SchemaKind::Array => value.is_array(),
            SchemaKind::Object => value.is_object(),
            SchemaKind::Untyped => true,
        }
    }

    pub fn mismatch_message(&self) -> &'static str {
        match self {
            SchemaKind::String => "Expected value to be a string",
            SchemaKind::Number | SchemaKind::Integer => "Expected value to be a number",
            SchemaKind::Boolean => "Expected value to be a boolean",
            SchemaKind::Null => "Expected value to be null",
            SchemaKind::Array => "Expected value to be an array",
            SchemaKind::Object | SchemaKind::Untyped => "Expected value to be an object",
        }
    }
}

/// The document used to resolve pointers, and the node being evaluated
#[derive(Debug, Clone, Copy)]
pub struct SchemaInfo<'s> {
    pub root: &'s Value,
    pub current: &'s Value,
}

impl<'s> SchemaInfo<'s> {
    pub fn new(root: &'s Value, current: &'s Value) -> Self {
        Self { root, current }
    }

    pub fn with_current(&self, current: &'s Value) -> Self {
        Self {
            root: self.root,
            current,
        }
    }

    pub fn kind(&self) -> SchemaKind {
        SchemaKind::of(self.current)
    }

    pub fn keyword(&self, name: &str) -> Option<&'s Value> {
        self.current.get(name)
    }

    /// A numeric keyword. Present but non-numeric is a schema error at `location/keyword`.
    pub fn number(&self, keyword: &str, location: &str) -> Result<Option<f64>> {
        match self.keyword(keyword) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| OasGuardError::schema(keyword_location(location, keyword), "must be a number")),
        }
    }

    /// A length or count keyword, which must be a non-negative integer
    pub fn count(&self, keyword: &str, location: &str) -> Result<Option<usize>> {
        let Some(count) = self.number(keyword, location)? else {
            return Ok(None);
        };

        if count < 0.0 || count.fract() != 0.0 {
            return Err(OasGuardError::schema(
                keyword_location(location, keyword),
                "must be a non-negative integer",
            ));
        }

        Ok(Some(count as usize))
    }
}

pub(crate) fn keyword_location(location: &str, keyword: &str) -> String {
    format!("{}/{}", location, keyword)
}

/// Render a JSON value for a message: strings bare, integral numbers without a fraction
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

/// Structural JSON equality where numbers compare by value (`1 == 1.0`)
pub(crate) fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_eq(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_eq(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Javascript-style truthiness
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
