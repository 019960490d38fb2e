//! Package metadata extraction.
//!
//! Derives the name, npm scope, git namespace and keywords of an existing
//! package from its manifest, and assembles the options handed to
//! `NpmAutopackage` for both new and upgraded packages.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::collaborators::AutopackageOptions;
use crate::config::{display_path, expand_home_dir};
use crate::error::{NdxError, Result};

/// Keywords every package carries.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["nodejs", "typescript", "tdd"];

/// Fallback npm scope and GitHub organisation.
pub const DEFAULT_NAMESPACE: &str = "neurodevs";

/// Directory packages are installed into.
pub const INSTALL_DIR: &str = "~/dev";

/// License of generated packages.
pub const LICENSE: &str = "MIT";

/// Author of generated packages.
pub const AUTHOR: &str = "Eric Yates <hello@ericthecurious.com>";

/// Matches the first path segment after the host of a repository URL, for
/// both URL (`git+https://github.com/ns/repo.git`) and scp-like
/// (`git@github.com:ns/repo.git`) forms.
static REPOSITORY_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/]+@)?[^/]+/|[^@/\s]+@[^:/\s]+:)([^/]+)/")
        .expect("REPOSITORY_NAMESPACE must compile")
});

/// A package name split into scope and bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedName {
    /// Scope without the leading `@`; empty for unscoped names.
    pub npm_namespace: String,
    /// Name without the scope.
    pub package_name: String,
}

/// Split `@scope/name` into its parts.
pub fn split_scoped_name(name: &str) -> ScopedName {
    match name.split_once('/') {
        Some((scope, rest)) => {
            let bare = rest.split('/').next().unwrap_or(rest);
            ScopedName {
                npm_namespace: scope.replacen('@', "", 1),
                package_name: bare.to_string(),
            }
        }
        None => ScopedName {
            npm_namespace: String::new(),
            package_name: name.to_string(),
        },
    }
}

/// Union the default keywords into existing ones.
///
/// If every default is already present the keywords are returned as they
/// are; otherwise the defaults are prepended to the existing keywords.
pub fn merge_default_keywords(existing: &[String]) -> Vec<String> {
    let has_defaults = DEFAULT_KEYWORDS
        .iter()
        .all(|keyword| existing.iter().any(|k| k == keyword));

    if has_defaults {
        return existing.to_vec();
    }

    DEFAULT_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .chain(existing.iter().cloned())
        .collect()
}

/// Namespace segment of a repository URL, if it has one.
pub fn git_namespace_from_url(url: &str) -> Option<String> {
    REPOSITORY_NAMESPACE
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|ns| !ns.is_empty())
}

/// The `keywords` array of a manifest. A missing or null field is empty.
fn read_keywords(manifest: &Value, path: &Path) -> Result<Vec<String>> {
    let invalid = || NdxError::InvalidManifest {
        path: path.to_path_buf(),
        message: "\"keywords\" must be an array of strings".to_string(),
    };

    match manifest.get("keywords") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from).ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}

/// Metadata read from an existing manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub package_name: String,
    /// Empty when the package name is unscoped.
    pub npm_namespace: String,
    pub git_namespace: Option<String>,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PackageMetadata {
    /// Extract metadata from a parsed manifest.
    ///
    /// `path` is only used for error messages.
    pub fn from_manifest(manifest: &Value, path: &Path) -> Result<Self> {
        let name = manifest
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| NdxError::InvalidManifest {
                path: path.to_path_buf(),
                message: "missing string field \"name\"".to_string(),
            })?;

        let ScopedName {
            npm_namespace,
            package_name,
        } = split_scoped_name(name);

        let description = manifest
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let keywords = read_keywords(manifest, path)?;

        let git_namespace = manifest
            .pointer("/repository/url")
            .and_then(Value::as_str)
            .and_then(git_namespace_from_url);

        Ok(Self {
            package_name,
            npm_namespace,
            git_namespace,
            description,
            keywords: merge_default_keywords(&keywords),
        })
    }

    /// Options for upgrading this package with `NpmAutopackage`.
    pub fn autopackage_options(&self) -> AutopackageOptions {
        let mut options = autopackage_options(
            &self.package_name,
            &self.description,
            self.keywords.clone(),
        );
        if let Some(git_namespace) = &self.git_namespace {
            options.git_namespace = git_namespace.clone();
        }
        if !self.npm_namespace.is_empty() {
            options.npm_namespace = self.npm_namespace.clone();
        }
        options
    }
}

/// `NpmAutopackage` options with the fixed namespace, license, author and
/// install directory.
pub fn autopackage_options(name: &str, description: &str, keywords: Vec<String>) -> AutopackageOptions {
    AutopackageOptions {
        name: name.to_string(),
        description: description.to_string(),
        keywords,
        git_namespace: DEFAULT_NAMESPACE.to_string(),
        npm_namespace: DEFAULT_NAMESPACE.to_string(),
        install_dir: display_path(&expand_home_dir(INSTALL_DIR)),
        license: LICENSE.to_string(),
        author: AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn metadata(manifest: Value) -> PackageMetadata {
        PackageMetadata::from_manifest(&manifest, Path::new("package.json")).unwrap()
    }

    #[test]
    fn splits_scoped_name() {
        assert_eq!(
            split_scoped_name("@scope/pkg"),
            ScopedName {
                npm_namespace: "scope".into(),
                package_name: "pkg".into(),
            }
        );
    }

    #[test]
    fn scope_without_at_sign_is_kept() {
        let scoped = split_scoped_name("scope/pkg");
        assert_eq!(scoped.npm_namespace, "scope");
        assert_eq!(scoped.package_name, "pkg");
    }

    #[test]
    fn unscoped_name_has_empty_namespace() {
        let scoped = split_scoped_name("pkg");
        assert_eq!(scoped.npm_namespace, "");
        assert_eq!(scoped.package_name, "pkg");
    }

    #[test]
    fn defaults_added_to_empty_keywords() {
        assert_eq!(
            merge_default_keywords(&[]),
            strings(&["nodejs", "typescript", "tdd"])
        );
    }

    #[test]
    fn defaults_prepended_when_any_missing() {
        assert_eq!(
            merge_default_keywords(&strings(&["foo"])),
            strings(&["nodejs", "typescript", "tdd", "foo"])
        );
        // No dedup beyond the all-present short-circuit
        assert_eq!(
            merge_default_keywords(&strings(&["tdd", "foo"])),
            strings(&["nodejs", "typescript", "tdd", "tdd", "foo"])
        );
    }

    #[test]
    fn keywords_with_all_defaults_are_kept_verbatim() {
        let existing = strings(&["eeg", "tdd", "nodejs", "typescript"]);
        assert_eq!(merge_default_keywords(&existing), existing);
    }

    #[test]
    fn git_namespace_from_https_url() {
        assert_eq!(
            git_namespace_from_url("git+https://github.com/octo/pkg.git"),
            Some("octo".to_string())
        );
        assert_eq!(
            git_namespace_from_url("https://user@gitlab.com/team/pkg"),
            Some("team".to_string())
        );
    }

    #[test]
    fn git_namespace_from_scp_url() {
        assert_eq!(
            git_namespace_from_url("git@github.com:octo/pkg.git"),
            Some("octo".to_string())
        );
    }

    #[test]
    fn git_namespace_missing_for_bare_host() {
        assert_eq!(git_namespace_from_url("https://github.com/"), None);
        assert_eq!(git_namespace_from_url("not a url"), None);
    }

    #[test]
    fn metadata_from_scoped_manifest() {
        let meta = metadata(json!({
            "name": "@scope/pkg",
            "description": "d",
            "keywords": ["nodejs", "typescript", "tdd"]
        }));

        assert_eq!(meta.package_name, "pkg");
        assert_eq!(meta.npm_namespace, "scope");
        assert_eq!(meta.description, "d");
        assert_eq!(meta.keywords, strings(&["nodejs", "typescript", "tdd"]));
        assert_eq!(meta.git_namespace, None);
    }

    #[test]
    fn metadata_without_keywords_gets_defaults() {
        let meta = metadata(json!({"name": "pkg"}));
        assert_eq!(meta.keywords, strings(&["nodejs", "typescript", "tdd"]));
        assert_eq!(meta.description, "");
    }

    #[test]
    fn metadata_reads_repository_namespace() {
        let meta = metadata(json!({
            "name": "pkg",
            "repository": {"type": "git", "url": "git+https://github.com/octo/pkg.git"}
        }));
        assert_eq!(meta.git_namespace.as_deref(), Some("octo"));
    }

    #[test]
    fn metadata_requires_name() {
        let err =
            PackageMetadata::from_manifest(&json!({"description": "d"}), Path::new("package.json"))
                .unwrap_err();
        assert!(matches!(err, NdxError::InvalidManifest { .. }));
    }

    #[test]
    fn metadata_rejects_non_string_keywords() {
        for keywords in [json!(["nodejs", "typescript", "tdd", 42]), json!("nodejs")] {
            let err = PackageMetadata::from_manifest(
                &json!({"name": "pkg", "keywords": keywords}),
                Path::new("package.json"),
            )
            .unwrap_err();
            assert!(
                matches!(err, NdxError::InvalidManifest { ref message, .. } if message.contains("keywords")),
                "{err}"
            );
        }
    }

    #[test]
    fn upgrade_options_fall_back_to_default_namespaces() {
        let options = metadata(json!({"name": "pkg", "description": "d"})).autopackage_options();

        assert_eq!(options.name, "pkg");
        assert_eq!(options.git_namespace, "neurodevs");
        assert_eq!(options.npm_namespace, "neurodevs");
        assert_eq!(options.license, "MIT");
        assert_eq!(options.author, "Eric Yates <hello@ericthecurious.com>");
    }

    #[test]
    fn upgrade_options_use_extracted_namespaces() {
        let options = metadata(json!({
            "name": "@scope/pkg",
            "repository": {"url": "git+https://github.com/octo/pkg.git"}
        }))
        .autopackage_options();

        assert_eq!(options.npm_namespace, "scope");
        assert_eq!(options.git_namespace, "octo");
    }

    #[test]
    fn install_dir_is_expanded() {
        let options = autopackage_options("pkg", "d", vec![]);
        assert!(!options.install_dir.starts_with('~'));
        assert!(options.install_dir.ends_with("dev"));
    }
}
