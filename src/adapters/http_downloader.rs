//! Installer downloads using reqwest.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::domain::{AppError, ProvisioningError};
use crate::ports::InstallerDownloader;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Blocking HTTP transport for installer artifacts.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::config_error(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }
}

impl InstallerDownloader for HttpDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        let failed = |details: String| ProvisioningError::InstallerDownload {
            url: url.to_string(),
            details,
        };

        info!("Downloading {} to {}", url, destination.display());
        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| failed(e.to_string()))?;

        let mut file = File::create(destination)?;
        response.copy_to(&mut file).map_err(|e| failed(e.to_string()))?;
        Ok(())
    }
}
