use std::path::PathBuf;

/// Provisioning capability error.
#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    #[error("{tool} not found; {hint}")]
    ToolMissing { tool: &'static str, hint: &'static str },

    #[error("Android SDK not found; install it with Android Studio")]
    SdkNotFound,

    #[error("CMake not found in Android SDK ({}); install CMake in SDK Manager", .0.display())]
    CmakeNotFound(PathBuf),

    #[error("Failed to download installer from {url}: {details}")]
    InstallerDownload { url: String, details: String },

    #[error("GitHub Package Registry credentials unavailable: {0}")]
    Credentials(String),
}
