use crate::config::ResolveOptions;
use crate::core::fs::{try_read_file, try_read_file_async};
use crate::core::path::{absolute_path, PACKAGE_MANIFEST, PNPM_WORKSPACE};
use locator_core::{workspace_globs_from_package, workspace_globs_from_pnpm, GlobSource, LocatorResult};
use std::path::Path;

/// Read the `package.json` workspace globs declared in `dir`
pub fn package_glob_source(dir: &Path) -> LocatorResult<GlobSource> {
    let content = try_read_file(&dir.join(PACKAGE_MANIFEST))?;
    GlobSource::from_content(content.as_deref(), workspace_globs_from_package)
}

/// Read the `pnpm-workspace.yaml` workspace globs declared in `dir`
pub fn pnpm_glob_source(dir: &Path) -> LocatorResult<GlobSource> {
    let content = try_read_file(&dir.join(PNPM_WORKSPACE))?;
    GlobSource::from_content(content.as_deref(), workspace_globs_from_pnpm)
}

pub async fn package_glob_source_async(dir: &Path) -> LocatorResult<GlobSource> {
    let content = try_read_file_async(&dir.join(PACKAGE_MANIFEST)).await?;
    GlobSource::from_content(content.as_deref(), workspace_globs_from_package)
}

pub async fn pnpm_glob_source_async(dir: &Path) -> LocatorResult<GlobSource> {
    let content = try_read_file_async(&dir.join(PNPM_WORKSPACE)).await?;
    GlobSource::from_content(content.as_deref(), workspace_globs_from_pnpm)
}

/// Get the workspace globs declared in a known workspace root
///
/// `root_dir` must already be the workspace root: no parent directories are
/// searched and the globs are not matched against anything. `package.json`
/// globs take precedence over `pnpm-workspace.yaml` globs.
pub fn get_workspace_globs(root_dir: &Path, options: ResolveOptions) -> LocatorResult<Option<Vec<String>>> {
    let root_dir = absolute_path(root_dir)?;

    if options.package_workspaces.is_enabled() {
        if let Some(globs) = package_glob_source(&root_dir)?.into_globs() {
            return Ok(Some(globs));
        }
    }

    if options.pnpm_workspaces.is_enabled() {
        if let Some(globs) = pnpm_glob_source(&root_dir)?.into_globs() {
            return Ok(Some(globs));
        }
    }

    tracing::debug!("No workspace globs declared in {}", root_dir.display());
    Ok(None)
}

/// Async form of [`get_workspace_globs`]
pub async fn get_workspace_globs_async(
    root_dir: &Path,
    options: ResolveOptions,
) -> LocatorResult<Option<Vec<String>>> {
    let root_dir = absolute_path(root_dir)?;

    if options.package_workspaces.is_enabled() {
        if let Some(globs) = package_glob_source_async(&root_dir).await?.into_globs() {
            return Ok(Some(globs));
        }
    }

    if options.pnpm_workspaces.is_enabled() {
        if let Some(globs) = pnpm_glob_source_async(&root_dir).await?.into_globs() {
            return Ok(Some(globs));
        }
    }

    tracing::debug!("No workspace globs declared in {}", root_dir.display());
    Ok(None)
}
