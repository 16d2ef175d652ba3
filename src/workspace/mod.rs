//! Workspace root resolution and glob extraction.

pub mod finder;
pub mod workspace_config;

pub use finder::{resolve_workspace_root, resolve_workspace_root_async};
pub use workspace_config::{
    get_workspace_globs, get_workspace_globs_async, package_glob_source, package_glob_source_async,
    pnpm_glob_source, pnpm_glob_source_async,
};

use crate::config::ResolveOptions;
use crate::core::path::current_dir;
use locator_core::LocatorResult;
use std::path::{Path, PathBuf};

/// [`resolve_workspace_root`] starting from the current working directory
pub fn resolve_workspace_root_from_cwd(options: ResolveOptions) -> LocatorResult<Option<PathBuf>> {
    resolve_workspace_root(&current_dir()?, options)
}

/// [`resolve_workspace_root_async`] starting from the current working directory
pub async fn resolve_workspace_root_from_cwd_async(
    options: ResolveOptions,
) -> LocatorResult<Option<PathBuf>> {
    resolve_workspace_root_async(&current_dir()?, options).await
}

/// [`get_workspace_globs`] for the current working directory
pub fn get_workspace_globs_from_cwd(options: ResolveOptions) -> LocatorResult<Option<Vec<String>>> {
    get_workspace_globs(&current_dir()?, options)
}

/// [`get_workspace_globs_async`] for the current working directory
pub async fn get_workspace_globs_from_cwd_async(
    options: ResolveOptions,
) -> LocatorResult<Option<Vec<String>>> {
    get_workspace_globs_async(&current_dir()?, options).await
}

/// Resolves workspaces with a fixed set of options
///
/// Holds no state besides the options; every call reads the filesystem again.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceLocator {
    options: ResolveOptions,
}

impl WorkspaceLocator {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Find the workspace root containing `starting_dir`
    pub fn resolve_root(&self, starting_dir: &Path) -> LocatorResult<Option<PathBuf>> {
        resolve_workspace_root(starting_dir, self.options)
    }

    pub async fn resolve_root_async(&self, starting_dir: &Path) -> LocatorResult<Option<PathBuf>> {
        resolve_workspace_root_async(starting_dir, self.options).await
    }

    /// Read the globs declared in a known workspace root
    pub fn workspace_globs(&self, root_dir: &Path) -> LocatorResult<Option<Vec<String>>> {
        get_workspace_globs(root_dir, self.options)
    }

    pub async fn workspace_globs_async(&self, root_dir: &Path) -> LocatorResult<Option<Vec<String>>> {
        get_workspace_globs_async(root_dir, self.options).await
    }
}
