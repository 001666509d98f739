//! Template file structure: a JSON object of named template groups.

use crate::error::PatternLoadError;
use serde_json::{Map, Value};
use std::path::Path;

/// Flattens `{ "group": ["tpl", ...], ... }` into one list, keeping group order
/// as written in the file and template order within each group.
pub fn flatten_groups(path: &Path, root: Value) -> Result<Vec<String>, PatternLoadError> {
    let groups: Map<String, Value> = match root {
        Value::Object(map) => map,
        _ => {
            return Err(PatternLoadError::NotAnObject {
                path: path.to_path_buf(),
            })
        }
    };

    let mut out = Vec::new();
    for (group, value) in groups {
        let invalid = || PatternLoadError::InvalidGroup {
            path: path.to_path_buf(),
            group: group.clone(),
        };
        let Value::Array(items) = value else {
            return Err(invalid());
        };
        for item in items {
            match item {
                Value::String(template) => out.push(template),
                _ => return Err(invalid()),
            }
        }
    }
    Ok(out)
}
