//! Ancestor directory search.
//!
//! [`Ancestors`] yields the starting directory and each of its parents up to
//! the filesystem root, paired with the starting directory's path relative to
//! that ancestor. The search functions run a probe over those pairs and stop
//! at the first definite answer.

use crate::core::path::{absolute_path, relative_to};
use crate::core::LocatorError;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Iterator over `(ancestor, start relative to ancestor)` pairs, innermost first
#[derive(Debug, Clone)]
pub struct Ancestors {
    start: PathBuf,
    next: Option<PathBuf>,
}

impl Ancestors {
    /// Start at `start`, made absolute and normalized
    pub fn new(start: &Path) -> Result<Self, LocatorError> {
        let start = absolute_path(start)?;
        Ok(Self {
            next: Some(start.clone()),
            start,
        })
    }

    /// The normalized starting directory
    pub fn start(&self) -> &Path {
        &self.start
    }
}

impl Iterator for Ancestors {
    type Item = (PathBuf, PathBuf);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        // The root has no parent, which ends the walk
        self.next = current.parent().map(Path::to_path_buf);
        let relative = relative_to(&self.start, &current);
        Some((current, relative))
    }
}

/// Walk from `start` to the filesystem root, returning the first answer of `probe`
///
/// The probe receives the current directory and the starting directory
/// relative to it. `Ok(None)` moves on to the parent, `Ok(Some(_))` ends the
/// search, and an error aborts it.
pub fn search_parent_dirs<T, E, F>(start: &Path, mut probe: F) -> Result<Option<T>, E>
where
    F: FnMut(&Path, &Path) -> Result<Option<T>, E>,
    E: From<LocatorError>,
{
    for (current, relative) in Ancestors::new(start)? {
        if let Some(found) = probe(&current, &relative)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Async form of [`search_parent_dirs`]
///
/// Each probe is awaited before the next ancestor is visited, so probes never
/// overlap.
pub async fn search_parent_dirs_async<T, E, F, Fut>(start: &Path, mut probe: F) -> Result<Option<T>, E>
where
    F: FnMut(PathBuf, PathBuf) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
    E: From<LocatorError>,
{
    for (current, relative) in Ancestors::new(start)? {
        if let Some(found) = probe(current, relative).await? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::to_slash;

    #[test]
    fn test_ancestors_reach_root() {
        let pairs: Vec<(PathBuf, String)> = Ancestors::new(Path::new("/test/packages/pkg"))
            .unwrap()
            .map(|(dir, rel)| (dir, to_slash(&rel)))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (PathBuf::from("/test/packages/pkg"), "".to_string()),
                (PathBuf::from("/test/packages"), "pkg".to_string()),
                (PathBuf::from("/test"), "packages/pkg".to_string()),
                (PathBuf::from("/"), "test/packages/pkg".to_string()),
            ]
        );
    }

    #[test]
    fn test_ancestors_normalize_start() {
        let ancestors = Ancestors::new(Path::new("/test/./packages/../apps/web/")).unwrap();
        assert_eq!(ancestors.start(), Path::new("/test/apps/web"));
    }

    #[test]
    fn test_search_stops_at_first_answer() {
        let mut visited = Vec::new();
        let found: Result<Option<PathBuf>, LocatorError> =
            search_parent_dirs(Path::new("/a/b/c"), |dir, _| {
                visited.push(dir.to_path_buf());
                Ok((dir == Path::new("/a/b")).then(|| dir.to_path_buf()))
            });

        assert_eq!(found.unwrap(), Some(PathBuf::from("/a/b")));
        assert_eq!(visited, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_search_without_answer_visits_each_dir_once() {
        let mut visited = Vec::new();
        let found: Result<Option<()>, LocatorError> = search_parent_dirs(Path::new("/a/b"), |dir, _| {
            visited.push(dir.to_path_buf());
            Ok(None)
        });

        assert_eq!(found.unwrap(), None);
        assert_eq!(
            visited,
            vec![PathBuf::from("/a/b"), PathBuf::from("/a"), PathBuf::from("/")]
        );
    }

    #[test]
    fn test_search_propagates_probe_error() {
        let mut calls = 0;
        let found: Result<Option<()>, LocatorError> = search_parent_dirs(Path::new("/a/b"), |_, _| {
            calls += 1;
            Err(LocatorError::Path("boom".to_string()))
        });

        assert!(found.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_async_search_runs_probes_in_order() {
        let mut visited = Vec::new();
        let found: Result<Option<String>, LocatorError> =
            search_parent_dirs_async(Path::new("/a/b/c"), |dir, rel| {
                visited.push(dir.clone());
                async move { Ok((dir == Path::new("/a")).then(|| to_slash(&rel))) }
            })
            .await;

        assert_eq!(found.unwrap(), Some("b/c".to_string()));
        assert_eq!(
            visited,
            vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b"), PathBuf::from("/a")]
        );
    }
}
