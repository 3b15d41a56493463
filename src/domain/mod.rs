pub mod error;
pub mod export;
pub mod platform;
pub mod properties;
pub mod provisioning;
pub mod tool_env;
pub mod version;

pub use error::AppError;
pub use export::{
    ExportError, PACKAGE_NAMESPACE, PackageReference, SENTINEL_VERSION, VersionManifest,
    VersionSelection,
};
pub use platform::HostPlatform;
pub use provisioning::{Credentials, ProjectLayout, ProvisioningError};
pub use tool_env::ToolEnv;
pub use version::ToolVersion;
