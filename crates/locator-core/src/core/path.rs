use crate::core::error::{LocatorError, LocatorResult};
use std::path::{Component, Path, PathBuf};

/// Name of the package manifest carrying bun / npm / yarn `workspaces`
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Name of the pnpm workspace declaration file
pub const PNPM_WORKSPACE: &str = "pnpm-workspace.yaml";

/// Lexically normalize a path
///
/// Drops `.` segments and trailing separators and folds `..` into the
/// preceding segment. `..` directly below the root stays at the root.
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                }
            }
            Component::Normal(segment) => normalized.push(segment),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}

/// Make a path absolute against the current working directory, then normalize it
pub fn absolute_path(path: &Path) -> LocatorResult<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_path(path));
    }

    let cwd = current_dir()?;
    Ok(normalize_path(&cwd.join(path)))
}

/// The current working directory, as a locator error on failure
pub fn current_dir() -> LocatorResult<PathBuf> {
    std::env::current_dir().map_err(|e| {
        LocatorError::Path(format!("Could not determine current directory: {}", e))
    })
}

/// Path of `path` relative to its ancestor `base`
///
/// Empty when both are the same directory.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Render a relative path with `/` separators, as glob patterns expect
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
