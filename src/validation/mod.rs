//! JSON Schema validation of arbitrary JSON values against OpenAPI / JSON-Schema
//! documents.
//!
//! Value violations come back as `Invalid` data. A schema that is broken for a
//! keyword the engine interprets (a non-numeric `maxLength`, an unresolvable
//! `$ref`, ...) is an `Err`.

mod array;
mod combinators;
mod config;
mod global;
mod invalid;
mod number;
mod object;
mod primitive;
pub mod resolver;
mod schema;
mod string;

pub use config::{PropertyPresence, RefPolicy, ValidatorConfig};
pub use invalid::Invalid;
pub(crate) use invalid::child;
pub use schema::{SchemaInfo, SchemaKind};

use crate::error::{OasGuardError, Result};
use serde_json::Value;

/// Validate `value` against `schema` with the default configuration.
///
/// `root` is the document `$ref` pointers are resolved against; it defaults
/// to `schema` itself.
pub fn validate(value: &Value, schema: &Value, root: Option<&Value>) -> Result<Vec<Invalid>> {
    Validator::default().validate(value, schema, root)
}

/// Stateless validation engine. Cheap to copy and share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate(
        &self,
        value: &Value,
        schema: &Value,
        root: Option<&Value>,
    ) -> Result<Vec<Invalid>> {
        let info = SchemaInfo::new(root.unwrap_or(schema), schema);
        self.validate_unknown(value, "#", info)
    }

    /// Resolve `info.current`, pick the validator for its kind and run it
    pub fn validate_unknown(
        &self,
        value: &Value,
        location: &str,
        info: SchemaInfo<'_>,
    ) -> Result<Vec<Invalid>> {
        self.dispatch(value, location, info, 0)
    }

    pub(crate) fn dispatch(
        &self,
        value: &Value,
        location: &str,
        info: SchemaInfo<'_>,
        depth: usize,
    ) -> Result<Vec<Invalid>> {
        if depth > self.config.max_depth {
            return Err(OasGuardError::DepthExceeded {
                location: location.to_string(),
                limit: self.config.max_depth,
            });
        }

        let current = resolver::resolve(info.root, info.current, location, self.config.ref_policy)?;
        let info = info.with_current(current);

        if let Value::Bool(accepts) = current {
            return Ok(invalid::check(*accepts, value, location, current, || {
                "Expected no value to be valid".to_string()
            })
            .into_iter()
            .collect());
        }

        // A single-hop target may itself be a reference node
        if resolver::reference(current, location)?.is_some() {
            return self.dispatch(value, location, info, depth + 1);
        }

        let kind = info.kind();
        let has_combinators = self.config.combinators && combinators::present(&info);
        tracing::trace!(location, ?kind, has_combinators, "dispatching");

        let mut invalids = match kind {
            SchemaKind::String => string::validate(value, location, info)?,
            SchemaKind::Number | SchemaKind::Integer => number::validate(value, location, info)?,
            SchemaKind::Boolean => primitive::validate_boolean(value, location, info)?,
            SchemaKind::Null => primitive::validate_null(value, location, info)?,
            SchemaKind::Array => array::validate(self, value, location, info, depth)?,
            SchemaKind::Object => object::validate(self, value, location, info, depth)?,
            SchemaKind::Untyped if has_combinators && !value.is_object() => {
                global::validate_global(value, location, info)?
            }
            SchemaKind::Untyped => object::validate(self, value, location, info, depth)?,
        };

        if has_combinators && kind.accepts(value) {
            invalids.extend(combinators::validate(self, value, location, info, depth)?);
        }

        Ok(invalids)
    }
}

/// Base-type check shared by every kind validator
pub(crate) fn type_mismatch(
    kind: SchemaKind,
    value: &Value,
    location: &str,
    info: SchemaInfo<'_>,
) -> Option<Invalid> {
    invalid::check(kind.accepts(value), value, location, info.current, || {
        kind.mismatch_message().to_string()
    })
}
