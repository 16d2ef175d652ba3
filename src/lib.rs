//! Locate the root of a JavaScript monorepo.
//!
//! Starting from a directory, parent directories are searched for a workspace
//! declaration whose globs include the starting directory:
//! - bun and npm: the `workspaces` list in `package.json`
//! - yarn: the `workspaces` list or `workspaces.packages` in `package.json`
//! - pnpm: the `packages` list in `pnpm-workspace.yaml`
//!
//! Every operation has a blocking and an async (tokio) form.

pub use locator_core::{GlobSource, LocatorError, LocatorResult, WorkspaceGlobs};

/// Core module re-exported from locator-core.
pub mod core;

/// Resolution options.
pub mod config;

/// Workspace resolution.
pub mod workspace;

pub use config::{ResolveOptions, SourceToggle};
pub use workspace::{
    get_workspace_globs, get_workspace_globs_async, get_workspace_globs_from_cwd,
    get_workspace_globs_from_cwd_async, resolve_workspace_root, resolve_workspace_root_async,
    resolve_workspace_root_from_cwd, resolve_workspace_root_from_cwd_async, WorkspaceLocator,
};
