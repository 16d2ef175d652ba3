//! Workspace declaration parsing.
//!
//! Each parser turns raw config text into a [`GlobSource`]. The resolver only
//! cares whether globs were found, but the other outcomes are kept apart so
//! callers can tell a broken file from a file that simply declares nothing.

pub mod package;
pub mod pnpm;

pub use package::workspace_globs_from_package;
pub use pnpm::workspace_globs_from_pnpm;

/// Outcome of reading workspace globs from one config source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobSource {
    /// The config file does not exist
    Absent,
    /// The config file exists but could not be parsed
    Malformed,
    /// The config file parsed but declares no workspace globs
    Inapplicable,
    /// The declared workspace globs, in declaration order
    Found(Vec<String>),
}

impl GlobSource {
    /// Parse optional file content, mapping a missing file to `Absent`
    pub fn from_content<F>(content: Option<&str>, parse: F) -> crate::LocatorResult<Self>
    where
        F: FnOnce(&str) -> crate::LocatorResult<Self>,
    {
        match content {
            Some(text) => parse(text),
            None => Ok(GlobSource::Absent),
        }
    }

    /// The declared globs, if any
    pub fn globs(&self) -> Option<&[String]> {
        match self {
            GlobSource::Found(globs) => Some(globs.as_slice()),
            _ => None,
        }
    }

    /// Collapse into the declared globs, if any
    pub fn into_globs(self) -> Option<Vec<String>> {
        match self {
            GlobSource::Found(globs) => Some(globs),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GlobSource::Found(_))
    }
}

/// Collect an array of strings, rejecting arrays holding anything else
fn string_list<'a, I>(items: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    items
        .into_iter()
        .map(|item| item.map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_absent() {
        let source = GlobSource::from_content(None, workspace_globs_from_package).unwrap();
        assert_eq!(source, GlobSource::Absent);
        assert!(source.into_globs().is_none());
    }

    #[test]
    fn test_found_exposes_globs() {
        let source = GlobSource::Found(vec!["packages/*".to_string()]);
        assert!(source.is_found());
        assert_eq!(source.globs(), Some(&["packages/*".to_string()][..]));
    }
}
