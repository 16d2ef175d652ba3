use super::{string_list, GlobSource};
use crate::core::LocatorResult;
use serde_json::error::Category;
use serde_json::Value;

/// Extract workspace globs from `package.json` content
///
/// Supports the list form used by bun, npm and yarn
/// (`"workspaces": ["packages/*"]`) and the yarn object form
/// (`"workspaces": { "packages": ["packages/*"] }`).
/// Syntax errors (including empty content) yield [`GlobSource::Malformed`];
/// any other parser failure is returned as an error.
pub fn workspace_globs_from_package(content: &str) -> LocatorResult<GlobSource> {
    let package: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
            tracing::trace!("Ignoring malformed package manifest: {}", e);
            return Ok(GlobSource::Malformed);
        }
        Err(e) => return Err(e.into()),
    };

    let Some(workspaces) = package.get("workspaces") else {
        return Ok(GlobSource::Inapplicable);
    };

    let globs = json_string_list(workspaces)
        .or_else(|| workspaces.get("packages").and_then(json_string_list));

    Ok(match globs {
        Some(globs) => GlobSource::Found(globs),
        None => GlobSource::Inapplicable,
    })
}

fn json_string_list(value: &Value) -> Option<Vec<String>> {
    string_list(value.as_array()?.iter().map(Value::as_str))
}
