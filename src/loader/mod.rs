pub mod openapi;

pub use openapi::{component_schemas, load_document, load_value, schema_at};
