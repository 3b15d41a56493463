//! Version manifest and selection rules for the Conan cache export.

mod error;
mod manifest;
mod selection;

use std::fmt;

pub use error::ExportError;
pub use manifest::{VersionManifest, VersionRecord};
pub use selection::{ALL_VERSIONS, SENTINEL_VERSION, VersionSelection};

/// User/channel the exported recipes are registered under.
pub const PACKAGE_NAMESPACE: &str = "AdguardTeam/NativeLibsCommon";

/// Conan reference for a recipe exported from the project directory, where the
/// package name comes from the recipe itself (`/<version>@<user>/<channel>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    version: String,
    namespace: String,
}

impl PackageReference {
    pub fn new(version: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self { version: version.into(), namespace: namespace.into() }
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}@{}", self.version, self.namespace)
    }
}
