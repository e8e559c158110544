use crate::{Result, graph::validator::validate_refs, loader};
use colored::*;
use std::path::Path;

/// Lint every `$ref` of a document. Returns whether no errors were found.
pub fn execute_refs(document_path: &Path) -> Result<bool> {
    println!("{}", "Checking $ref pointers...".bright_blue());
    println!("  Path: {}", document_path.display());

    let document = loader::load_document(document_path)?;
    let result = validate_refs(&document);

    if !result.warnings.is_empty() {
        println!("    {}", "⚠ Warnings:".yellow());
        for warning in &result.warnings {
            println!("      - {}", warning.yellow());
        }
    }

    if !result.errors.is_empty() {
        println!("    {}", "✗ Errors:".red().bold());
        for error in &result.errors {
            println!("      - {}", error.red());
        }
    }

    if result.is_ok() {
        println!("{}", format!("✓ {}", result.summary()).green().bold());
    } else {
        println!("{}", format!("✗ {}", result.summary()).red().bold());
    }

    Ok(result.is_ok())
}
