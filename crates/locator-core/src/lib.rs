// Core functionality
pub mod core;

// Workspace config parsing
pub mod manifest;

// Workspace glob matching
pub mod glob;

// Ancestor directory search
pub mod walk;

// Re-export commonly used types
pub use crate::core::{LocatorError, LocatorResult};
pub use glob::{path_matches_workspace_globs, WorkspaceGlobs};
pub use manifest::{workspace_globs_from_package, workspace_globs_from_pnpm, GlobSource};
pub use walk::{search_parent_dirs, search_parent_dirs_async, Ancestors};
