//! Upgrade-package command implementation.
//!
//! `ndx upgrade.package` reads the current `package.json` and has
//! `NpmAutopackage` regenerate the package from the latest template with
//! the same name, scope, description and keywords.

use std::path::Path;

use crate::error::Result;
use crate::manifest::{read_json, PackageMetadata, PACKAGE_JSON};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The upgrade.package command implementation.
pub struct UpgradePackageCommand;

impl Command for UpgradePackageCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let path = Path::new(PACKAGE_JSON);
        let manifest = read_json(ctx.host, path)?;
        let metadata = PackageMetadata::from_manifest(&manifest, path)?;

        tracing::debug!("Upgrading {:?}", metadata);

        let mut autopackage = ctx.toolkit.npm_autopackage(metadata.autopackage_options());
        autopackage.run()?;

        ctx.ui
            .success(&format!("Upgraded package {}", metadata.package_name));
        Ok(CommandResult::completed())
    }
}
