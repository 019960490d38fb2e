//! Scaffold directories for generated modules.

use std::path::Path;

use crate::collaborators::{ImplAutomoduleOptions, UiAutomoduleOptions};
use crate::error::Result;
use crate::host::Host;

/// The three directories a generated module is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldDirs {
    pub test_dir: String,
    pub module_dir: String,
    pub fake_dir: String,
}

impl ScaffoldDirs {
    /// Directories for an implementation of `interface_name`.
    pub fn for_impl(interface_name: &str) -> Self {
        Self {
            test_dir: "src/__tests__/impl".to_string(),
            module_dir: "src/impl".to_string(),
            fake_dir: format!("src/testDoubles/{}", interface_name),
        }
    }

    /// Directories for the React component `component_name`.
    pub fn for_ui(component_name: &str) -> Self {
        Self {
            test_dir: "src/__tests__/ui".to_string(),
            module_dir: "src/ui".to_string(),
            fake_dir: format!("src/testDoubles/{}", component_name),
        }
    }

    /// Create the test, module and fake directories, in that order.
    ///
    /// Stops at the first failure.
    pub fn create(&self, host: &mut dyn Host) -> Result<()> {
        for dir in [&self.test_dir, &self.module_dir, &self.fake_dir] {
            host.create_dir_all(Path::new(dir))?;
        }
        Ok(())
    }

    pub fn impl_options(&self, interface_name: &str, impl_name: &str) -> ImplAutomoduleOptions {
        ImplAutomoduleOptions {
            test_save_dir: self.test_dir.clone(),
            module_save_dir: self.module_dir.clone(),
            fake_save_dir: self.fake_dir.clone(),
            interface_name: interface_name.to_string(),
            impl_name: impl_name.to_string(),
        }
    }

    pub fn ui_options(&self, component_name: &str) -> UiAutomoduleOptions {
        UiAutomoduleOptions {
            test_save_dir: self.test_dir.clone(),
            module_save_dir: self.module_dir.clone(),
            fake_save_dir: self.fake_dir.clone(),
            component_name: component_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use std::path::PathBuf;

    #[test]
    fn creates_directories_in_order() {
        let mut host = MockHost::new();

        ScaffoldDirs::for_impl("Parser").create(&mut host).unwrap();

        assert_eq!(
            host.created_dirs(),
            &[
                PathBuf::from("src/__tests__/impl"),
                PathBuf::from("src/impl"),
                PathBuf::from("src/testDoubles/Parser"),
            ]
        );
    }

    #[test]
    fn ui_dirs_use_component_name() {
        let dirs = ScaffoldDirs::for_ui("Button");
        assert_eq!(dirs.test_dir, "src/__tests__/ui");
        assert_eq!(dirs.module_dir, "src/ui");
        assert_eq!(dirs.fake_dir, "src/testDoubles/Button");
    }

    #[test]
    fn stops_at_first_failure() {
        let mut host = MockHost::new();
        host.fail_create_dir("src/impl");

        let result = ScaffoldDirs::for_impl("Parser").create(&mut host);

        assert!(result.is_err());
        assert_eq!(host.created_dirs(), &[PathBuf::from("src/__tests__/impl")]);
    }

    #[test]
    fn options_carry_directories() {
        let options = ScaffoldDirs::for_impl("Parser").impl_options("Parser", "JsonParser");
        assert_eq!(options.test_save_dir, "src/__tests__/impl");
        assert_eq!(options.module_save_dir, "src/impl");
        assert_eq!(options.fake_save_dir, "src/testDoubles/Parser");
        assert_eq!(options.impl_name, "JsonParser");
    }
}
