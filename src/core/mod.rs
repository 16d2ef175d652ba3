//! Core module re-exports.
//!
//! Most core functionality lives in `locator-core`; the async file reader
//! lives here because it needs the tokio runtime.

pub use locator_core::core::*;

/// Path helpers re-exported from locator-core.
pub mod path {
    pub use locator_core::core::path::*;
}

/// File reading (sync from locator-core, async on tokio).
pub mod fs;
