use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One violated constraint, located by a JSON-Pointer-style path rooted at `#`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invalid {
    pub location: String,
    pub message: String,
    /// The (resolved) schema node whose keyword was violated
    pub schema: Value,
    /// The offending value
    pub value: Value,
}

impl Invalid {
    pub fn new(
        location: impl Into<String>,
        message: impl Into<String>,
        schema: &Value,
        value: &Value,
    ) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            schema: schema.clone(),
            value: value.clone(),
        }
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Emit an `Invalid` unless `valid` holds. The message is only built on failure.
pub(crate) fn check<F>(
    valid: bool,
    value: &Value,
    location: &str,
    schema: &Value,
    message: F,
) -> Option<Invalid>
where
    F: FnOnce() -> String,
{
    if valid {
        None
    } else {
        Some(Invalid::new(location, message(), schema, value))
    }
}

/// Append a pointer segment to a location, escaping `~` and `/`
pub(crate) fn child(location: &str, segment: impl fmt::Display) -> String {
    let segment = segment.to_string().replace('~', "~0").replace('/', "~1");
    format!("{}/{}", location, segment)
}
