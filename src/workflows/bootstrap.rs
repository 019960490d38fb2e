//! React dependency bootstrap.
//!
//! Before a UI component is scaffolded the project must be able to compile
//! and test `.tsx` files. When any required package is missing from
//! `package.json`, the user is asked once whether to install them. On yes,
//! the bootstrap installs the packages, patches `tsconfig.json` and the
//! jest config in `package.json`, writes a jsdom setup file and recompiles.
//!
//! Declining is not an error: the caller carries on without installing.
//! Failures in the install sequence propagate and nothing is rolled back.

use std::path::Path;

use serde_json::{json, Value};

use crate::error::Result;
use crate::host::Host;
use crate::manifest::{read_json, spread, write_json, DependencyRequirement, PACKAGE_JSON, TSCONFIG_JSON};
use crate::ui::{Prompt, UserInterface};

/// Prompt key of the install confirmation.
pub const INSTALL_PROMPT_KEY: &str = "shouldInstall";

/// Question asked when dependencies are missing.
pub const INSTALL_PROMPT: &str =
    "Some required dependencies are missing! Press Enter to install, or any other key to abort.";

/// Directory the setup file is written into.
pub const SETUP_TESTS_DIR: &str = "src/__tests__";

/// Path of the jsdom setup file.
pub const SETUP_TESTS_PATH: &str = "src/__tests__/setupTests.ts";

/// Compiled setup file registered with jest.
pub const SETUP_FILES_ENTRY: &str = "<rootDir>/build/__tests__/setupTests.js";

/// Command that recompiles the project.
pub const RECOMPILE_COMMAND: &str = "npx tsc";

/// Browser globals for jest tests running under node.
pub const SETUP_TESTS_CONTENT: &str = r#"import { JSDOM } from 'jsdom'

const jsdom = new JSDOM('<!doctype html><html><body></body></html>', {
    url: 'http://localhost',
})

global.window = jsdom.window as unknown as Window & typeof globalThis
global.document = jsdom.window.document
global.navigator = jsdom.window.navigator
global.HTMLElement = jsdom.window.HTMLElement
global.getComputedStyle = jsdom.window.getComputedStyle

global.ResizeObserver = class {
    public observe() {}
    public unobserve() {}
    public disconnect() {}
}

global.SVGElement = jsdom.window.SVGElement
"#;

/// Outcome of [`DependencyBootstrap::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    /// All required packages were already present.
    Installed,
    /// Packages were missing and have been installed.
    Bootstrapped,
    /// Packages are missing and the user declined (or aborted) the install.
    Missing,
}

/// Installs a [`DependencyRequirement`] into a project on demand.
#[derive(Debug, Clone, Copy)]
pub struct DependencyBootstrap {
    requirement: DependencyRequirement,
}

impl DependencyBootstrap {
    pub fn new(requirement: DependencyRequirement) -> Self {
        Self { requirement }
    }

    /// Whether the project manifest lists every required package.
    pub fn is_installed(&self, host: &mut dyn Host) -> Result<bool> {
        let manifest = read_json(host, Path::new(PACKAGE_JSON))?;
        Ok(self.requirement.is_satisfied_by(&manifest))
    }

    /// Check the manifest and, if confirmed, install and configure.
    pub fn run(&self, ui: &mut dyn UserInterface, host: &mut dyn Host) -> Result<BootstrapState> {
        if self.is_installed(host)? {
            tracing::debug!("Required dependencies already installed");
            return Ok(BootstrapState::Installed);
        }

        let responses = ui.ask(&[
            Prompt::confirm(INSTALL_PROMPT_KEY, INSTALL_PROMPT).with_default("true")
        ])?;

        if !responses.confirmed(INSTALL_PROMPT_KEY) {
            tracing::debug!("Dependency install declined");
            return Ok(BootstrapState::Missing);
        }

        self.install(ui, host)?;
        Ok(BootstrapState::Bootstrapped)
    }

    fn install(&self, ui: &mut dyn UserInterface, host: &mut dyn Host) -> Result<()> {
        ui.message("Installing required dependencies...");
        host.exec(&self.requirement.install_command())?;

        ui.message("Installing required dev dependencies...");
        host.exec(&self.requirement.install_dev_command())?;

        ui.message("Updating tsconfig.json for React...");
        let tsconfig = read_json(host, Path::new(TSCONFIG_JSON))?;
        write_json(host, Path::new(TSCONFIG_JSON), &patch_tsconfig(&tsconfig))?;

        ui.message(&format!("Creating {}...", SETUP_TESTS_PATH));
        host.create_dir_all(Path::new(SETUP_TESTS_DIR))?;
        host.write(Path::new(SETUP_TESTS_PATH), SETUP_TESTS_CONTENT)?;

        ui.message("Adding setupTests.ts to package.json...");
        let manifest = read_json(host, Path::new(PACKAGE_JSON))?;
        write_json(host, Path::new(PACKAGE_JSON), &patch_jest_setup(&manifest))?;

        ui.message("Recompiling project for .tsx files...");
        host.exec(RECOMPILE_COMMAND)?;

        Ok(())
    }
}

/// Enable the React JSX transform and compile everything under `src`.
///
/// An existing `compilerOptions.jsx` wins over `react-jsx`. `include` is
/// always replaced. Other keys keep their position.
pub fn patch_tsconfig(tsconfig: &Value) -> Value {
    let compiler_options = spread(
        &json!({"jsx": "react-jsx"}),
        tsconfig.get("compilerOptions").unwrap_or(&Value::Null),
    );

    spread(
        tsconfig,
        &json!({
            "compilerOptions": compiler_options,
            "include": ["src"],
        }),
    )
}

/// Register the compiled setup file in the jest config.
///
/// Other jest keys are kept; `setupFiles` is replaced.
pub fn patch_jest_setup(manifest: &Value) -> Value {
    let jest = spread(
        manifest.get("jest").unwrap_or(&Value::Null),
        &json!({"setupFiles": [SETUP_FILES_ENTRY]}),
    );

    spread(manifest, &json!({"jest": jest}))
}
