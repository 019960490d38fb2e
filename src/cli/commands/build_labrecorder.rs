//! Build-labrecorder command implementation.
//!
//! Run from a LabRecorder checkout: rebuilds it without the GUI against the
//! liblsl installed under `/opt/local` and installs the result there.

use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Clean build and install of LabRecorder.
pub const BUILD_COMMAND: &str = "sudo rm -rf build/ \
&& cmake -S . -B build \
-DCMAKE_INSTALL_PREFIX=/opt/local \
-DLSL_INSTALL_ROOT=/opt/local \
-DLSL_UNIXFOLDERS=1 \
-DBUILD_GUI=OFF \
&& cmake --build build \
&& sudo cmake --install build";

/// The build.labrecorder command implementation.
pub struct BuildLabrecorderCommand;

impl Command for BuildLabrecorderCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        ctx.host.exec(BUILD_COMMAND)?;
        Ok(CommandResult::completed())
    }
}
