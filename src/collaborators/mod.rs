//! Collaborators from the `@neurodevs/meta-node` toolkit.
//!
//! Scaffolding, packaging, snippet installation, propagation and type
//! checking are done by classes of the Node toolkit. Each one follows the
//! same contract: a static `Create(...)` factory taking plain data, then an
//! instance method `run()` (or `install()` for the snippet suite).
//!
//! [`Toolkit`] is the abstract factory commands use to obtain collaborators.
//! [`NodeToolkit`] runs them through `node`; [`MockToolkit`] records
//! constructions and runs for tests.

pub mod mock;
pub mod node;

pub use mock::{Construction, MockToolkit};
pub use node::NodeToolkit;

use serde::Serialize;

use crate::error::Result;

/// A constructed collaborator that can be run once.
pub trait Collaborator {
    /// Run the collaborator to completion.
    fn run(&mut self) -> Result<()>;
}

/// A collaborator that installs editor snippets.
pub trait SnippetSuite {
    /// Install the snippets and their keybindings.
    fn install(&mut self) -> Result<()>;
}

/// A collaborator that clones git repositories.
pub trait Autocloner {
    /// Clone every URL into `options.dir_path`.
    fn run(&mut self, options: &AutoclonerOptions) -> Result<()>;
}

/// Factory for collaborator instances.
///
/// Constructing a collaborator does no work. The work happens when the
/// returned collaborator is run.
pub trait Toolkit {
    /// `ImplAutomodule`: generates an implementation class, its test and fake.
    fn impl_automodule(&self, options: ImplAutomoduleOptions) -> Box<dyn Collaborator>;

    /// `UiAutomodule`: generates a React component, its test and fake.
    fn ui_automodule(&self, options: UiAutomoduleOptions) -> Box<dyn Collaborator>;

    /// `NpmAutopackage`: creates or upgrades a package from the template.
    fn npm_autopackage(&self, options: AutopackageOptions) -> Box<dyn Collaborator>;

    /// `VscodeSnippetKeybinder`: registers one snippet and its keybinding.
    fn snippet_keybinder(&self, options: SnippetKeybinderOptions) -> Box<dyn Collaborator>;

    /// `TypescriptClassSnippetSuite`: the bundled snippet set.
    fn snippet_suite(&self) -> Box<dyn SnippetSuite>;

    /// `NpmPropagationCoordinator`: pushes `repo_path`'s template to `repo_paths`.
    fn propagation_coordinator(
        &self,
        repo_path: &str,
        repo_paths: Vec<String>,
        options: PropagationOptions,
    ) -> Box<dyn Collaborator>;

    /// `NpmWorkspaceTypeChecker`: type checks every package under `workspace_path`.
    fn workspace_type_checker(&self, workspace_path: &str) -> Box<dyn Collaborator>;

    /// `GitAutocloner`: clones repositories into a directory.
    fn git_autocloner(&self) -> Box<dyn Autocloner>;
}

/// Options for `ImplAutomodule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplAutomoduleOptions {
    pub test_save_dir: String,
    pub module_save_dir: String,
    pub fake_save_dir: String,
    pub interface_name: String,
    pub impl_name: String,
}

/// Options for `UiAutomodule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiAutomoduleOptions {
    pub test_save_dir: String,
    pub module_save_dir: String,
    pub fake_save_dir: String,
    pub component_name: String,
}

/// Options for `NpmAutopackage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutopackageOptions {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub git_namespace: String,
    pub npm_namespace: String,
    pub install_dir: String,
    pub license: String,
    pub author: String,
}

/// Options for `VscodeSnippetKeybinder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetKeybinderOptions {
    pub name: String,
    pub description: String,
    pub lines: Vec<String>,
    pub keybinding: String,
}

/// Options for `NpmPropagationCoordinator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagationOptions {
    pub should_git_commit: bool,
    pub should_propagate_majors: bool,
}

/// Options for `GitAutocloner.run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoclonerOptions {
    pub urls: Vec<String>,
    pub dir_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_serialize_with_camel_case_keys() {
        let options = ImplAutomoduleOptions {
            test_save_dir: "src/__tests__/impl".into(),
            module_save_dir: "src/impl".into(),
            fake_save_dir: "src/testDoubles/Parser".into(),
            interface_name: "Parser".into(),
            impl_name: "JsonParser".into(),
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "testSaveDir": "src/__tests__/impl",
                "moduleSaveDir": "src/impl",
                "fakeSaveDir": "src/testDoubles/Parser",
                "interfaceName": "Parser",
                "implName": "JsonParser",
            })
        );
    }

    #[test]
    fn propagation_options_serialize_flags() {
        let options = PropagationOptions {
            should_git_commit: true,
            should_propagate_majors: false,
        };

        assert_eq!(
            serde_json::to_value(options).unwrap(),
            json!({"shouldGitCommit": true, "shouldPropagateMajors": false})
        );
    }
}
