use serde::{Deserialize, Serialize};

/// Whether a workspace config source is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum SourceToggle {
    #[default]
    Enabled,
    Disabled,
}

impl SourceToggle {
    pub fn is_enabled(self) -> bool {
        self == SourceToggle::Enabled
    }

    /// Only an explicit `false` disables a source
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(false) => SourceToggle::Disabled,
            _ => SourceToggle::Enabled,
        }
    }
}

impl From<bool> for SourceToggle {
    fn from(enabled: bool) -> Self {
        if enabled {
            SourceToggle::Enabled
        } else {
            SourceToggle::Disabled
        }
    }
}

impl From<SourceToggle> for bool {
    fn from(toggle: SourceToggle) -> Self {
        toggle.is_enabled()
    }
}

/// Which workspace config sources are consulted
///
/// Both sources are enabled unless explicitly turned off. Embeddable in a
/// host tool's config file:
///
/// ```yaml
/// package_workspaces: true
/// pnpm_workspaces: false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// `workspaces` in `package.json` (bun, npm, yarn)
    #[serde(default = "default_enabled")]
    pub package_workspaces: SourceToggle,

    /// `packages` in `pnpm-workspace.yaml`
    #[serde(default = "default_enabled")]
    pub pnpm_workspaces: SourceToggle,
}

fn default_enabled() -> SourceToggle {
    SourceToggle::Enabled
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            package_workspaces: default_enabled(),
            pnpm_workspaces: default_enabled(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from optional flags, where only `Some(false)` disables
    pub fn from_flags(package_workspaces: Option<bool>, pnpm_workspaces: Option<bool>) -> Self {
        Self {
            package_workspaces: SourceToggle::from_flag(package_workspaces),
            pnpm_workspaces: SourceToggle::from_flag(pnpm_workspaces),
        }
    }

    pub fn with_package_workspaces(mut self, enabled: bool) -> Self {
        self.package_workspaces = enabled.into();
        self
    }

    pub fn with_pnpm_workspaces(mut self, enabled: bool) -> Self {
        self.pnpm_workspaces = enabled.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ResolveOptions::default();
        assert!(options.package_workspaces.is_enabled());
        assert!(options.pnpm_workspaces.is_enabled());
    }

    #[test]
    fn test_options_from_flags() {
        let options = ResolveOptions::from_flags(None, Some(true));
        assert_eq!(options, ResolveOptions::default());

        let options = ResolveOptions::from_flags(Some(false), None);
        assert_eq!(options.package_workspaces, SourceToggle::Disabled);
        assert_eq!(options.pnpm_workspaces, SourceToggle::Enabled);
    }

    #[test]
    fn test_options_from_yaml() {
        let options: ResolveOptions = serde_yaml::from_str("pnpm_workspaces: false\n").unwrap();
        assert!(options.package_workspaces.is_enabled());
        assert!(!options.pnpm_workspaces.is_enabled());

        let empty: ResolveOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(empty, ResolveOptions::default());
    }

    #[test]
    fn test_options_serialize_as_flags() {
        let options = ResolveOptions::new().with_package_workspaces(false);
        let content = serde_yaml::to_string(&options).unwrap();
        assert!(content.contains("package_workspaces: false"));
        assert!(content.contains("pnpm_workspaces: true"));
    }
}
