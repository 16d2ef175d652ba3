pub mod error;
pub mod fs;
pub mod path;

pub use error::{LocatorError, LocatorResult};
pub use fs::try_read_file;
