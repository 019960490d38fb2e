//! ndx - developer tooling for neurodevs packages.
//!
//! ndx dispatches a single command token to a workflow: scaffolding
//! implementation modules and React components, creating and upgrading
//! npm packages from the shared template, binding editor snippets and
//! propagating releases. The generators themselves live in the Node
//! toolkit `@neurodevs/meta-node`; ndx collects the inputs, prepares the
//! project and hands off.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, command table and commands
//! - [`collaborators`] - Toolkit abstraction and the Node bridge
//! - [`config`] - Runtime settings and path helpers
//! - [`error`] - Error types and result aliases
//! - [`host`] - File and process side effects
//! - [`manifest`] - `package.json` and `tsconfig.json` handling
//! - [`repos`] - Preset repositories of the neurodevs organisation
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts and terminal output
//! - [`workflows`] - Dependency bootstrap and scaffolding
//!
//! # Example
//!
//! ```
//! use ndx::cli::CommandDispatcher;
//! use ndx::collaborators::MockToolkit;
//! use ndx::host::MockHost;
//! use ndx::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("interfaceName", "Parser");
//! ui.set_prompt_response("implName", "JsonParser");
//! let mut host = MockHost::new();
//! let toolkit = MockToolkit::new();
//!
//! CommandDispatcher::new(vec!["create.impl".to_string()])
//!     .dispatch(&mut ui, &mut host, &toolkit)
//!     .unwrap();
//!
//! assert_eq!(host.created_dirs().len(), 3);
//! assert_eq!(toolkit.calls("ImplAutomodule", "run"), 1);
//! ```

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod host;
pub mod manifest;
pub mod repos;
pub mod shell;
pub mod ui;
pub mod workflows;

pub use error::{NdxError, Result};
