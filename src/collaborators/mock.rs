//! Recording toolkit for tests.
//!
//! Every collaborator constructed through [`MockToolkit`] is recorded as a
//! [`Construction`] holding the class name and the JSON form of its
//! arguments, and every `run`/`install` call is counted per class. A fresh
//! toolkit is created per test; nothing is shared between instances.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::error::{NdxError, Result};

use super::{
    Autocloner, AutoclonerOptions, AutopackageOptions, Collaborator, ImplAutomoduleOptions,
    PropagationOptions, SnippetKeybinderOptions, SnippetSuite, Toolkit, UiAutomoduleOptions,
};

/// A recorded `Create(...)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    pub class: String,
    pub args: Value,
}

#[derive(Debug, Default)]
struct Log {
    constructions: Vec<Construction>,
    calls: Vec<(String, String, Value)>,
    failing_class: Option<String>,
}

/// Toolkit that records constructions and runs.
#[derive(Debug, Clone, Default)]
pub struct MockToolkit {
    log: Rc<RefCell<Log>>,
}

impl MockToolkit {
    /// Create an empty recording toolkit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make running collaborators of this class fail.
    pub fn fail_class(&self, class: &str) {
        self.log.borrow_mut().failing_class = Some(class.to_string());
    }

    /// All constructions, in order.
    pub fn constructions(&self) -> Vec<Construction> {
        self.log.borrow().constructions.clone()
    }

    /// Arguments of every construction of `class`, in order.
    pub fn constructed(&self, class: &str) -> Vec<Value> {
        self.log
            .borrow()
            .constructions
            .iter()
            .filter(|c| c.class == class)
            .map(|c| c.args.clone())
            .collect()
    }

    /// First constructor argument of the first construction of `class`.
    pub fn options(&self, class: &str) -> Option<Value> {
        self.constructed(class)
            .into_iter()
            .next()
            .and_then(|args| args.get(0).cloned())
    }

    /// Number of calls of `method` on collaborators of `class`.
    pub fn calls(&self, class: &str, method: &str) -> usize {
        self.log
            .borrow()
            .calls
            .iter()
            .filter(|(c, m, _)| c == class && m == method)
            .count()
    }

    /// Arguments passed to `method` calls on `class`.
    pub fn call_args(&self, class: &str, method: &str) -> Vec<Value> {
        self.log
            .borrow()
            .calls
            .iter()
            .filter(|(c, m, _)| c == class && m == method)
            .map(|(_, _, args)| args.clone())
            .collect()
    }

    fn construct(&self, class: &str, args: Value) -> MockCollaborator {
        self.log.borrow_mut().constructions.push(Construction {
            class: class.to_string(),
            args,
        });
        MockCollaborator {
            class: class.to_string(),
            log: Rc::clone(&self.log),
        }
    }
}

/// Collaborator handed out by [`MockToolkit`].
#[derive(Debug)]
pub struct MockCollaborator {
    class: String,
    log: Rc<RefCell<Log>>,
}

impl MockCollaborator {
    fn record(&self, method: &str, args: Value) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.calls
            .push((self.class.clone(), method.to_string(), args));
        if log.failing_class.as_deref() == Some(self.class.as_str()) {
            return Err(NdxError::CollaboratorFailed {
                class: self.class.clone(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl Collaborator for MockCollaborator {
    fn run(&mut self) -> Result<()> {
        self.record("run", json!([]))
    }
}

impl SnippetSuite for MockCollaborator {
    fn install(&mut self) -> Result<()> {
        self.record("install", json!([]))
    }
}

impl Autocloner for MockCollaborator {
    fn run(&mut self, options: &AutoclonerOptions) -> Result<()> {
        self.record("run", json!([options]))
    }
}

impl Toolkit for MockToolkit {
    fn impl_automodule(&self, options: ImplAutomoduleOptions) -> Box<dyn Collaborator> {
        Box::new(self.construct("ImplAutomodule", json!([options])))
    }

    fn ui_automodule(&self, options: UiAutomoduleOptions) -> Box<dyn Collaborator> {
        Box::new(self.construct("UiAutomodule", json!([options])))
    }

    fn npm_autopackage(&self, options: AutopackageOptions) -> Box<dyn Collaborator> {
        Box::new(self.construct("NpmAutopackage", json!([options])))
    }

    fn snippet_keybinder(&self, options: SnippetKeybinderOptions) -> Box<dyn Collaborator> {
        Box::new(self.construct("VscodeSnippetKeybinder", json!([options])))
    }

    fn snippet_suite(&self) -> Box<dyn SnippetSuite> {
        Box::new(self.construct("TypescriptClassSnippetSuite", json!([])))
    }

    fn propagation_coordinator(
        &self,
        repo_path: &str,
        repo_paths: Vec<String>,
        options: PropagationOptions,
    ) -> Box<dyn Collaborator> {
        Box::new(self.construct(
            "NpmPropagationCoordinator",
            json!([repo_path, repo_paths, options]),
        ))
    }

    fn workspace_type_checker(&self, workspace_path: &str) -> Box<dyn Collaborator> {
        Box::new(self.construct("NpmWorkspaceTypeChecker", json!([workspace_path])))
    }

    fn git_autocloner(&self) -> Box<dyn Autocloner> {
        Box::new(self.construct("GitAutocloner", json!([])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_constructions_and_runs() {
        let toolkit = MockToolkit::new();

        let mut checker = toolkit.workspace_type_checker(".");
        assert_eq!(toolkit.calls("NpmWorkspaceTypeChecker", "run"), 0);
        checker.run().unwrap();

        assert_eq!(toolkit.constructed("NpmWorkspaceTypeChecker"), vec![json!(["."])]);
        assert_eq!(toolkit.calls("NpmWorkspaceTypeChecker", "run"), 1);
    }

    #[test]
    fn options_returns_first_argument() {
        let toolkit = MockToolkit::new();
        let _ = toolkit.propagation_coordinator(".", vec![], PropagationOptions::default());

        assert_eq!(
            toolkit.options("NpmPropagationCoordinator"),
            Some(json!("."))
        );
    }

    #[test]
    fn failing_class_errors_on_run() {
        let toolkit = MockToolkit::new();
        toolkit.fail_class("TypescriptClassSnippetSuite");

        let mut suite = toolkit.snippet_suite();

        assert!(suite.install().is_err());
        assert_eq!(toolkit.calls("TypescriptClassSnippetSuite", "install"), 1);
    }

    #[test]
    fn toolkits_do_not_share_state() {
        let first = MockToolkit::new();
        let second = MockToolkit::new();
        let _ = first.snippet_suite();

        assert_eq!(first.constructions().len(), 1);
        assert!(second.constructions().is_empty());
    }
}
