use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_schemas(document_path: &Path) -> Result<()> {
    let document = loader::load_document(document_path)?;
    let names = loader::component_schemas(&document);

    if names.is_empty() {
        println!("{}", "No component schemas found".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} schema(s):", names.len()).bright_blue());
    for name in names {
        let kind = loader::schema_at(&document, &name)
            .ok()
            .and_then(|schema| schema.get("type"))
            .and_then(|t| t.as_str())
            .unwrap_or("-");
        println!("  {} {}", name.cyan(), format!("({})", kind).dimmed());
    }

    Ok(())
}
