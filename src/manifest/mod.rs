//! Project manifest and compiler config handling.
//!
//! - [`json`] - reading, writing and spread-merging JSON files
//! - [`dependencies`] - required dependency detection
//! - [`package`] - package metadata extraction and autopackage options

pub mod dependencies;
pub mod json;
pub mod package;

pub use dependencies::{DependencyRequirement, REACT_REQUIREMENT};
pub use json::{read_json, spread, to_pretty_json, write_json};
pub use package::{
    autopackage_options, git_namespace_from_url, merge_default_keywords, split_scoped_name,
    PackageMetadata, ScopedName, DEFAULT_KEYWORDS, DEFAULT_NAMESPACE,
};

/// Path of the npm manifest, relative to the project root.
pub const PACKAGE_JSON: &str = "package.json";

/// Path of the TypeScript compiler config, relative to the project root.
pub const TSCONFIG_JSON: &str = "tsconfig.json";
