//! Bridge to the Node toolkit.
//!
//! Each collaborator run starts `node` with a small ES module that imports
//! the collaborator class from the toolkit package, calls its static
//! `Create` with the JSON-encoded arguments and awaits the requested method.
//! Arguments travel through environment variables so no shell quoting is
//! involved.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;
use serde_json::{json, Value};

use crate::config::Settings;
use crate::error::{NdxError, Result};

use super::{
    Autocloner, AutoclonerOptions, AutopackageOptions, Collaborator, ImplAutomoduleOptions,
    PropagationOptions, SnippetKeybinderOptions, SnippetSuite, Toolkit, UiAutomoduleOptions,
};

const BRIDGE_SCRIPT: &str = r#"
const toolkit = await import(process.env.NDX_TOOLKIT_MODULE)
const Collaborator = toolkit[process.env.NDX_COLLABORATOR_CLASS]
if (!Collaborator) {
    throw new Error(`${process.env.NDX_COLLABORATOR_CLASS} is not exported by ${process.env.NDX_TOOLKIT_MODULE}`)
}
const instance = await Collaborator.Create(...JSON.parse(process.env.NDX_COLLABORATOR_ARGS))
await instance[process.env.NDX_COLLABORATOR_METHOD](...JSON.parse(process.env.NDX_COLLABORATOR_METHOD_ARGS))
"#;

/// Toolkit whose collaborators run in `node`.
#[derive(Debug, Clone)]
pub struct NodeToolkit {
    node: String,
    module: String,
    cwd: PathBuf,
    github_token: Option<String>,
}

impl NodeToolkit {
    /// Create a toolkit from the runtime settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            node: settings.node.clone(),
            module: settings.toolkit_module.clone(),
            cwd: settings.project_root.clone(),
            github_token: settings.github_token.clone(),
        }
    }

    fn invocation(&self, class: &str, args: Value) -> NodeInvocation {
        NodeInvocation {
            toolkit: self.clone(),
            class: class.to_string(),
            args,
        }
    }
}

/// One `Create(...)` call plus the method to run on the instance.
#[derive(Debug, Clone)]
pub struct NodeInvocation {
    toolkit: NodeToolkit,
    class: String,
    args: Value,
}

impl NodeInvocation {
    /// Environment handed to the bridge script.
    pub fn envs(&self, method: &str, method_args: &Value) -> Vec<(&'static str, String)> {
        let mut envs = vec![
            ("NDX_TOOLKIT_MODULE", self.toolkit.module.clone()),
            ("NDX_COLLABORATOR_CLASS", self.class.clone()),
            ("NDX_COLLABORATOR_ARGS", self.args.to_string()),
            ("NDX_COLLABORATOR_METHOD", method.to_string()),
            ("NDX_COLLABORATOR_METHOD_ARGS", method_args.to_string()),
        ];
        if let Some(token) = &self.toolkit.github_token {
            envs.push(("GITHUB_TOKEN", token.clone()));
        }
        envs
    }

    fn call(&self, method: &str, method_args: Value) -> Result<()> {
        tracing::debug!(
            "Running {}.Create({}).{}() via {}",
            self.class,
            self.args,
            method,
            self.toolkit.node
        );

        let status = Command::new(&self.toolkit.node)
            .args(["--input-type=module", "-e", BRIDGE_SCRIPT])
            .envs(self.envs(method, &method_args))
            .current_dir(&self.toolkit.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to start {}", self.toolkit.node))?;

        if !status.success() {
            return Err(NdxError::CollaboratorFailed {
                class: self.class.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl Collaborator for NodeInvocation {
    fn run(&mut self) -> Result<()> {
        self.call("run", json!([]))
    }
}

impl SnippetSuite for NodeInvocation {
    fn install(&mut self) -> Result<()> {
        self.call("install", json!([]))
    }
}

impl Autocloner for NodeInvocation {
    fn run(&mut self, options: &AutoclonerOptions) -> Result<()> {
        self.call("run", json!([options]))
    }
}

impl Toolkit for NodeToolkit {
    fn impl_automodule(&self, options: ImplAutomoduleOptions) -> Box<dyn Collaborator> {
        Box::new(self.invocation("ImplAutomodule", json!([options])))
    }

    fn ui_automodule(&self, options: UiAutomoduleOptions) -> Box<dyn Collaborator> {
        Box::new(self.invocation("UiAutomodule", json!([options])))
    }

    fn npm_autopackage(&self, options: AutopackageOptions) -> Box<dyn Collaborator> {
        Box::new(self.invocation("NpmAutopackage", json!([options])))
    }

    fn snippet_keybinder(&self, options: SnippetKeybinderOptions) -> Box<dyn Collaborator> {
        Box::new(self.invocation("VscodeSnippetKeybinder", json!([options])))
    }

    fn snippet_suite(&self) -> Box<dyn SnippetSuite> {
        Box::new(self.invocation("TypescriptClassSnippetSuite", json!([])))
    }

    fn propagation_coordinator(
        &self,
        repo_path: &str,
        repo_paths: Vec<String>,
        options: PropagationOptions,
    ) -> Box<dyn Collaborator> {
        Box::new(self.invocation(
            "NpmPropagationCoordinator",
            json!([repo_path, repo_paths, options]),
        ))
    }

    fn workspace_type_checker(&self, workspace_path: &str) -> Box<dyn Collaborator> {
        Box::new(self.invocation("NpmWorkspaceTypeChecker", json!([workspace_path])))
    }

    fn git_autocloner(&self) -> Box<dyn Autocloner> {
        Box::new(self.invocation("GitAutocloner", json!([])))
    }
}
