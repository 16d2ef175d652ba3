use crate::config::ResolveOptions;
use crate::core::path::to_slash;
use crate::workspace::workspace_config::{
    package_glob_source, package_glob_source_async, pnpm_glob_source, pnpm_glob_source_async,
};
use locator_core::{
    path_matches_workspace_globs, search_parent_dirs, search_parent_dirs_async, GlobSource,
    LocatorResult,
};
use std::path::{Path, PathBuf};

/// Resolve the root of the workspace containing `starting_dir`
///
/// Walks from `starting_dir` up to the filesystem root and returns the first
/// directory whose workspace globs include `starting_dir`:
/// - bun, npm, yarn: `workspaces` (or `workspaces.packages`) in `package.json`
/// - pnpm: `packages` in `pnpm-workspace.yaml`
///
/// `pnpm-workspace.yaml` is only read in directories that also have a
/// `package.json` (when `package.json` workspaces are enabled).
pub fn resolve_workspace_root(
    starting_dir: &Path,
    options: ResolveOptions,
) -> LocatorResult<Option<PathBuf>> {
    search_parent_dirs(starting_dir, |current_dir, relative_dir| {
        probe_workspace_root(current_dir, relative_dir, options)
    })
}

/// Async form of [`resolve_workspace_root`]
pub async fn resolve_workspace_root_async(
    starting_dir: &Path,
    options: ResolveOptions,
) -> LocatorResult<Option<PathBuf>> {
    search_parent_dirs_async(starting_dir, |current_dir, relative_dir| {
        probe_workspace_root_async(current_dir, relative_dir, options)
    })
    .await
}

fn probe_workspace_root(
    current_dir: &Path,
    relative_dir: &Path,
    options: ResolveOptions,
) -> LocatorResult<Option<PathBuf>> {
    tracing::debug!("Checking {} for workspace config", current_dir.display());
    let relative_dir = to_slash(relative_dir);
    let mut manifest_present = true;

    if options.package_workspaces.is_enabled() {
        let source = package_glob_source(current_dir)?;
        manifest_present = source != GlobSource::Absent;
        if source_matches(&source, &relative_dir) {
            tracing::debug!("Workspace root {} (package.json)", current_dir.display());
            return Ok(Some(current_dir.to_path_buf()));
        }
    }

    if options.pnpm_workspaces.is_enabled() && manifest_present {
        let source = pnpm_glob_source(current_dir)?;
        if source_matches(&source, &relative_dir) {
            tracing::debug!("Workspace root {} (pnpm-workspace.yaml)", current_dir.display());
            return Ok(Some(current_dir.to_path_buf()));
        }
    }

    Ok(None)
}

async fn probe_workspace_root_async(
    current_dir: PathBuf,
    relative_dir: PathBuf,
    options: ResolveOptions,
) -> LocatorResult<Option<PathBuf>> {
    tracing::debug!("Checking {} for workspace config", current_dir.display());
    let relative_dir = to_slash(&relative_dir);
    let mut manifest_present = true;

    if options.package_workspaces.is_enabled() {
        let source = package_glob_source_async(&current_dir).await?;
        manifest_present = source != GlobSource::Absent;
        if source_matches(&source, &relative_dir) {
            tracing::debug!("Workspace root {} (package.json)", current_dir.display());
            return Ok(Some(current_dir));
        }
    }

    if options.pnpm_workspaces.is_enabled() && manifest_present {
        let source = pnpm_glob_source_async(&current_dir).await?;
        if source_matches(&source, &relative_dir) {
            tracing::debug!("Workspace root {} (pnpm-workspace.yaml)", current_dir.display());
            return Ok(Some(current_dir));
        }
    }

    Ok(None)
}

fn source_matches(source: &GlobSource, relative_dir: &str) -> bool {
    source
        .globs()
        .is_some_and(|globs| path_matches_workspace_globs(globs, relative_dir))
}
