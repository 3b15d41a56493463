mod credential_provider;
mod git;
mod installer_downloader;
mod package_cache;
mod process_runner;

pub use credential_provider::CredentialProvider;
pub use git::Git;
pub use installer_downloader::InstallerDownloader;
pub use package_cache::PackageCache;
pub use process_runner::{Invocation, ProcessRunner};
