use super::{string_list, GlobSource};
use crate::core::LocatorResult;
use serde_yaml::Value;

/// Extract workspace globs from `pnpm-workspace.yaml` content
///
/// Empty content is not a document and yields [`GlobSource::Inapplicable`]
/// without parsing. Parsing from memory can only fail on the document
/// itself, so every YAML error yields [`GlobSource::Malformed`].
pub fn workspace_globs_from_pnpm(content: &str) -> LocatorResult<GlobSource> {
    if content.is_empty() {
        return Ok(GlobSource::Inapplicable);
    }

    let workspace: Value = match serde_yaml::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!("Ignoring malformed pnpm workspace file: {}", e);
            return Ok(GlobSource::Malformed);
        }
    };

    let globs = workspace
        .get("packages")
        .and_then(Value::as_sequence)
        .and_then(|packages| string_list(packages.iter().map(Value::as_str)));

    Ok(match globs {
        Some(globs) => GlobSource::Found(globs),
        None => GlobSource::Inapplicable,
    })
}
