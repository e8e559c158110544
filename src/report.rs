use crate::error::Result;
use crate::validation::Invalid;
use colored::*;
use indexmap::IndexMap;
use serde::Serialize;

/// Machine-readable outcome of one validation call
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport<'a> {
    pub valid: bool,
    pub invalids: &'a [Invalid],
}

impl<'a> ValidationReport<'a> {
    pub fn new(invalids: &'a [Invalid]) -> Self {
        Self {
            valid: invalids.is_empty(),
            invalids,
        }
    }
}

/// Group invalids by location, keeping the order locations were first reported
pub fn group_by_location(invalids: &[Invalid]) -> IndexMap<&str, Vec<&Invalid>> {
    let mut groups: IndexMap<&str, Vec<&Invalid>> = IndexMap::new();
    for invalid in invalids {
        groups
            .entry(invalid.location.as_str())
            .or_default()
            .push(invalid);
    }
    groups
}

pub fn render_text(invalids: &[Invalid]) -> String {
    if invalids.is_empty() {
        return format!("{}", "✓ Value is valid".green());
    }

    let mut lines = vec![format!(
        "{}",
        format!("✗ {} violation(s) found", invalids.len()).red().bold()
    )];

    for (location, group) in group_by_location(invalids) {
        lines.push(format!("  {}", location.cyan()));
        for invalid in group {
            lines.push(format!("    - {}", invalid.message.red()));
            lines.push(format!("      value: {}", invalid.value));
        }
    }

    lines.join("\n")
}

pub fn render_json(invalids: &[Invalid]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ValidationReport::new(invalids))?)
}
