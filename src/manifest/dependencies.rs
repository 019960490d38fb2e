//! Required dependency detection.

use serde_json::Value;

/// Packages a workflow needs in a project's manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyRequirement {
    /// Keys required in `dependencies`.
    pub dependencies: &'static [&'static str],
    /// Keys required in `devDependencies`.
    pub dev_dependencies: &'static [&'static str],
}

/// Packages needed to author and test React components.
pub const REACT_REQUIREMENT: DependencyRequirement = DependencyRequirement {
    dependencies: &["react", "react-dom"],
    dev_dependencies: &[
        "@types/react",
        "@types/react-dom",
        "@types/jsdom",
        "@testing-library/react",
        "@testing-library/dom",
        "@testing-library/jest-dom",
        "jsdom",
    ],
};

impl DependencyRequirement {
    /// Whether every required package is listed in the manifest.
    ///
    /// A missing `dependencies` or `devDependencies` map counts as empty.
    pub fn is_satisfied_by(&self, manifest: &Value) -> bool {
        has_all(manifest.get("dependencies"), self.dependencies)
            && has_all(manifest.get("devDependencies"), self.dev_dependencies)
    }

    /// Install command for the runtime dependencies.
    pub fn install_command(&self) -> String {
        format!("yarn add {}", self.dependencies.join(" "))
    }

    /// Install command for the dev dependencies.
    pub fn install_dev_command(&self) -> String {
        format!("yarn add -D {}", self.dev_dependencies.join(" "))
    }
}

fn has_all(map: Option<&Value>, required: &[&str]) -> bool {
    let installed = map.and_then(Value::as_object);
    required
        .iter()
        .all(|name| installed.is_some_and(|m| m.contains_key(*name)))
}
