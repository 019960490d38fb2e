//! Repositories of the `neurodevs` organisation.
//!
//! The npm repos are the packages kept on the shared template; template
//! updates are propagated to them from their sibling checkouts. The full
//! preset list adds the native libraries and is what
//! [`NeurodevsAutocloner`] clones.

use crate::collaborators::{AutoclonerOptions, Toolkit};
use crate::error::Result;
use crate::manifest::DEFAULT_NAMESPACE;

/// npm packages built from the shared template.
pub const NPM_REPO_NAMES: &[&str] = &[
    "commit-sense",
    "fake-node-core",
    "generate-id",
    "i-insula",
    "meta-node",
    "ndx-cli",
    "node-biometrics",
    "node-biosensors",
    "node-biosignal-processing",
    "node-ble",
    "node-causality",
    "node-csv",
    "node-eeg",
    "node-file-checker",
    "node-file-loader",
    "node-html-loader",
    "node-knowledge-graphs",
    "node-lsl",
    "node-mangled-names",
    "node-neuropype",
    "node-osf",
    "node-ppg",
    "node-robotic-arm",
    "node-server-plots",
    "node-signal-processing",
    "node-task-queue",
    "node-tdd",
    "node-test-counter",
    "node-wifi-connector",
    "node-xdf",
    "personomic",
    "react-connectivity-graphs",
    "react-github-badge",
];

/// Repositories cloned ahead of the npm packages.
pub const NATIVE_REPO_NAMES: &[&str] = &["fili.js", "labrecorder", "liblsl", "libxdf"];

/// Every preset repository, native libraries first.
pub fn preset_repo_names() -> impl Iterator<Item = &'static str> {
    NATIVE_REPO_NAMES.iter().chain(NPM_REPO_NAMES).copied()
}

/// GitHub clone URL of a `neurodevs` repository.
pub fn repo_url(name: &str) -> String {
    format!("https://github.com/{}/{}.git", DEFAULT_NAMESPACE, name)
}

/// Paths of the npm repos checked out next to the current one.
pub fn sibling_repo_paths() -> Vec<String> {
    NPM_REPO_NAMES
        .iter()
        .map(|name| format!("../{}", name))
        .collect()
}

/// Clones every preset repository into a directory.
pub struct NeurodevsAutocloner<'a> {
    toolkit: &'a dyn Toolkit,
}

impl<'a> NeurodevsAutocloner<'a> {
    pub fn new(toolkit: &'a dyn Toolkit) -> Self {
        Self { toolkit }
    }

    /// Clone the preset repositories into `dir_path`.
    pub fn run(&self, dir_path: &str) -> Result<()> {
        let options = AutoclonerOptions {
            urls: preset_repo_names().map(repo_url).collect(),
            dir_path: dir_path.to_string(),
        };

        tracing::debug!("Cloning {} repositories into {}", options.urls.len(), dir_path);
        self.toolkit.git_autocloner().run(&options)
    }
}
