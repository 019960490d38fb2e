//! Runtime settings.
//!
//! ndx has no configuration file and no option flags: the first argument
//! is always the command token. Settings come from the environment and are
//! passed to the runner and the Node toolkit bridge.
//!
//! | Variable        | Setting                                    |
//! |-----------------|--------------------------------------------|
//! | `NDX_DEBUG`     | debug logging                              |
//! | `NDX_META_NODE` | module the collaborator classes come from  |
//! | `NDX_NODE`      | node executable                            |
//! | `GITHUB_TOKEN`  | token forwarded to collaborators           |

use std::path::{Path, PathBuf};

/// Default module specifier of the Node toolkit.
pub const DEFAULT_TOOLKIT_MODULE: &str = "@neurodevs/meta-node";

/// Default node executable.
pub const DEFAULT_NODE: &str = "node";

pub const DEBUG_ENV: &str = "NDX_DEBUG";
pub const TOOLKIT_MODULE_ENV: &str = "NDX_META_NODE";
pub const NODE_ENV: &str = "NDX_NODE";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory commands operate on.
    pub project_root: PathBuf,
    /// Node executable used for collaborators.
    pub node: String,
    /// Module the collaborator classes are imported from.
    pub toolkit_module: String,
    /// Token forwarded to collaborators that talk to GitHub.
    pub github_token: Option<String>,
    /// Debug logging enabled.
    pub debug: bool,
}

impl Settings {
    /// Settings with defaults for the given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            node: DEFAULT_NODE.to_string(),
            toolkit_module: DEFAULT_TOOLKIT_MODULE.to_string(),
            github_token: None,
            debug: false,
        }
    }

    /// Settings for the given project root, read from the process environment.
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        Self::from_lookup(project_root, |key| std::env::var(key).ok())
    }

    /// Settings for the given project root, reading variables through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(project_root: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::new(project_root);

        Self {
            node: var(NODE_ENV).unwrap_or(defaults.node),
            toolkit_module: var(TOOLKIT_MODULE_ENV).unwrap_or(defaults.toolkit_module),
            github_token: var(GITHUB_TOKEN_ENV),
            debug: var(DEBUG_ENV).is_some_and(|value| is_enabled(&value)),
            project_root: defaults.project_root,
        }
    }
}

fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "n" | "off" | "f"
    )
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when the home directory is unknown, are
/// returned unchanged.
pub fn expand_home_dir(input: &str) -> PathBuf {
    match (input.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches(['/', '\\'])),
        _ => PathBuf::from(input),
    }
}

/// Render a path for handing to collaborators.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::new("/projects/app");
        assert_eq!(settings.project_root, PathBuf::from("/projects/app"));
        assert_eq!(settings.node, "node");
        assert_eq!(settings.toolkit_module, "@neurodevs/meta-node");
        assert!(settings.github_token.is_none());
        assert!(!settings.debug);
    }

    fn settings_with(vars: &[(&str, &str)]) -> Settings {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup("/projects/app", |key| {
            vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn from_lookup_without_variables_uses_defaults() {
        assert_eq!(settings_with(&[]), Settings::new("/projects/app"));
    }

    #[test]
    fn from_lookup_reads_overrides() {
        let settings = settings_with(&[
            ("NDX_NODE", "/usr/bin/node"),
            ("NDX_META_NODE", "/src/meta-node/build/index.js"),
            ("GITHUB_TOKEN", "ghp_test"),
            ("NDX_DEBUG", "1"),
        ]);

        assert_eq!(settings.node, "/usr/bin/node");
        assert_eq!(settings.toolkit_module, "/src/meta-node/build/index.js");
        assert_eq!(settings.github_token.as_deref(), Some("ghp_test"));
        assert!(settings.debug);
    }

    #[test]
    fn from_lookup_treats_empty_as_unset() {
        let settings = settings_with(&[("NDX_NODE", ""), ("GITHUB_TOKEN", "")]);
        assert_eq!(settings.node, "node");
        assert!(settings.github_token.is_none());
    }

    #[test]
    fn debug_accepts_falsy_spellings() {
        for value in ["0", "false", "FALSE", "no", "off"] {
            assert!(!settings_with(&[("NDX_DEBUG", value)]).debug, "{value}");
        }
        for value in ["1", "true", "yes"] {
            assert!(settings_with(&[("NDX_DEBUG", value)]).debug, "{value}");
        }
    }

    #[test]
    fn expand_home_dir_replaces_tilde() {
        let home = dirs::home_dir().expect("home dir in test environment");
        assert_eq!(expand_home_dir("~/dev"), home.join("dev"));
        assert_eq!(expand_home_dir("~"), home);
    }

    #[test]
    fn expand_home_dir_leaves_other_paths() {
        assert_eq!(expand_home_dir("/opt/local"), PathBuf::from("/opt/local"));
        assert_eq!(expand_home_dir("dev/~"), PathBuf::from("dev/~"));
    }
}
