//! Multi-step workflows shared by commands.
//!
//! - [`bootstrap`] - installing and configuring React dependencies
//! - [`scaffold`] - creating directories for generated modules

pub mod bootstrap;
pub mod scaffold;

pub use bootstrap::{patch_jest_setup, patch_tsconfig, BootstrapState, DependencyBootstrap};
pub use scaffold::ScaffoldDirs;
