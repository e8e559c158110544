use super::config::RefPolicy;
use super::schema::keyword_location;
use crate::error::{OasGuardError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// The `$ref` pointer of a node at `location`, if it is a reference node
pub fn reference<'s>(node: &'s Value, location: &str) -> Result<Option<&'s str>> {
    match node.get("$ref") {
        None => Ok(None),
        Some(Value::String(pointer)) => Ok(Some(pointer)),
        Some(_) => Err(OasGuardError::schema(
            keyword_location(location, "$ref"),
            "must be a string",
        )),
    }
}

/// Substitute a reference node with the node it points to.
///
/// Nodes without `$ref` are returned unchanged. Under `RefPolicy::SingleHop`
/// the target is returned as found, even if it is itself a reference node.
/// `location` is where `node` sits in the schema, used for error reporting.
pub fn resolve<'s>(
    root: &'s Value,
    node: &'s Value,
    location: &str,
    policy: RefPolicy,
) -> Result<&'s Value> {
    let Some(pointer) = reference(node, location)? else {
        return Ok(node);
    };

    match policy {
        RefPolicy::SingleHop => resolve_pointer(root, pointer),
        RefPolicy::Transitive => {
            let mut seen = HashSet::new();
            let mut pointer = pointer;
            loop {
                if !seen.insert(pointer) {
                    return Err(OasGuardError::CircularRef(pointer.to_string()));
                }
                let target = resolve_pointer(root, pointer)?;
                match reference(target, pointer)? {
                    Some(next) => pointer = next,
                    None => return Ok(target),
                }
            }
        }
    }
}

/// Walk `root` along a local JSON pointer such as `#/components/schemas/Pet`
pub fn resolve_pointer<'s>(root: &'s Value, pointer: &str) -> Result<&'s Value> {
    let Some(path) = pointer.strip_prefix('#') else {
        return Err(OasGuardError::UnresolvedRef(format!(
            "{} (only document-local references are supported)",
            pointer
        )));
    };

    // "#/" addresses the empty-string key, not the root
    let Some(path) = path.strip_prefix('/') else {
        return if path.is_empty() {
            Ok(root)
        } else {
            Err(OasGuardError::UnresolvedRef(pointer.to_string()))
        };
    };

    let mut node = root;
    for segment in path.split('/') {
        let segment = unescape(segment);
        let next = match node {
            Value::Object(map) => map.get(segment.as_str()),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        node = next.ok_or_else(|| OasGuardError::UnresolvedRef(pointer.to_string()))?;
    }

    tracing::debug!(pointer, "resolved $ref");
    Ok(node)
}

fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
