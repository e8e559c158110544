use crate::{
    Result,
    cli::OutputFormat,
    loader, report,
    validation::{Validator, ValidatorConfig},
};
use colored::*;
use std::path::Path;

/// Validate a value file against a schema. Returns whether the value is valid.
pub fn execute_validate(
    document_path: &Path,
    schema: Option<&str>,
    value_path: &Path,
    format: &OutputFormat,
    config: ValidatorConfig,
) -> Result<bool> {
    let document = loader::load_document(document_path)?;
    let value = loader::load_value(value_path)?;

    let schema_node = match schema {
        Some(name) => loader::schema_at(&document, name)?,
        None => &document,
    };

    tracing::debug!(?config, schema = schema.unwrap_or("#"), "validating");
    let invalids = Validator::new(config).validate(&value, schema_node, Some(&document))?;

    match format {
        OutputFormat::Json => println!("{}", report::render_json(&invalids)?),
        OutputFormat::Text => {
            println!("{}", "Validating value...".bright_blue());
            println!("  Document: {}", document_path.display());
            println!("  Schema: {}", schema.unwrap_or("#").bold());
            println!("  Value: {}", value_path.display());
            println!();
            println!("{}", report::render_text(&invalids));
        }
    }

    Ok(invalids.is_empty())
}
