use globset::{Glob, GlobBuilder, GlobMatcher};

/// One compiled workspace glob
///
/// Path segments starting with `.` only match pattern segments that start
/// with `.` themselves. A trailing `/**` also matches its base directory.
#[derive(Debug, Clone)]
struct WorkspacePattern {
    matchers: Vec<GlobMatcher>,
    /// Pattern segments starting with `.`, with their position
    dot_segments: Vec<(usize, GlobMatcher)>,
    globstar: bool,
}

impl WorkspacePattern {
    fn new(pattern: &str) -> Result<Self, globset::Error> {
        let mut matchers = vec![compile(pattern)?];
        if let Some(base) = pattern.strip_suffix("/**") {
            if !base.is_empty() {
                matchers.push(compile(base)?);
            }
        }

        let mut dot_segments = Vec::new();
        for (index, segment) in pattern.split('/').enumerate() {
            if segment.starts_with('.') {
                dot_segments.push((index, Glob::new(segment)?.compile_matcher()));
            }
        }

        Ok(Self {
            matchers,
            dot_segments,
            globstar: pattern.split('/').any(|segment| segment == "**"),
        })
    }

    fn is_match(&self, relative_path: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(relative_path))
            && self.allows_dot_segments(relative_path)
    }

    fn allows_dot_segments(&self, relative_path: &str) -> bool {
        relative_path
            .split('/')
            .enumerate()
            .filter(|(_, segment)| segment.starts_with('.'))
            .all(|(index, segment)| {
                // `**` shifts positions, so any dot segment of the pattern will do
                self.dot_segments.iter().any(|(position, matcher)| {
                    (self.globstar || *position == index) && matcher.is_match(segment)
                })
            })
    }
}

fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Compiled workspace globs
///
/// Patterns starting with `!` exclude paths matched by the other patterns.
/// `*` stops at `/`, `**` crosses zero or more directories. Hidden
/// directories only match patterns that name them with a leading `.`.
#[derive(Debug, Clone)]
pub struct WorkspaceGlobs {
    include: Vec<WorkspacePattern>,
    exclude: Vec<WorkspacePattern>,
}

impl WorkspaceGlobs {
    /// Compile workspace globs, skipping patterns that are not valid globs
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let (negated, body) = match pattern.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, pattern),
            };

            match WorkspacePattern::new(clean_pattern(body)) {
                Ok(compiled) if negated => exclude.push(compiled),
                Ok(compiled) => include.push(compiled),
                Err(e) => {
                    tracing::warn!("Skipping invalid workspace glob '{}': {}", pattern, e);
                }
            }
        }

        Self { include, exclude }
    }

    /// Check a `/`-separated path relative to the workspace root
    ///
    /// With only exclusion patterns, everything not excluded matches.
    pub fn is_match(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| p.is_match(relative_path));

        included && !self.exclude.iter().any(|p| p.is_match(relative_path))
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

fn clean_pattern(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    match pattern.trim_end_matches('/') {
        "" => pattern,
        trimmed => trimmed,
    }
}

/// Whether a directory at `relative_path` from a candidate root belongs to its workspace
///
/// An empty relative path is the candidate root itself, which always belongs
/// to its own workspace.
pub fn path_matches_workspace_globs<S: AsRef<str>>(globs: &[S], relative_path: &str) -> bool {
    if relative_path.is_empty() {
        return true;
    }

    let globs = WorkspaceGlobs::new(globs);
    !globs.is_empty() && globs.is_match(relative_path)
}
