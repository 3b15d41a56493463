use crate::ports::{CredentialProvider, InstallerDownloader, ProcessRunner};

/// Dependencies the provisioning steps run against.
pub struct ProvisionContext<R, D, C>
where
    R: ProcessRunner,
    D: InstallerDownloader,
    C: CredentialProvider,
{
    runner: R,
    downloader: D,
    credentials: C,
}

impl<R, D, C> ProvisionContext<R, D, C>
where
    R: ProcessRunner,
    D: InstallerDownloader,
    C: CredentialProvider,
{
    pub fn new(runner: R, downloader: D, credentials: C) -> Self {
        Self { runner, downloader, credentials }
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Get a reference to the registry credential source.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }
}
