use std::path::Path;

use crate::domain::AppError;

pub trait InstallerDownloader {
    /// Download `url` into the file at `destination`, replacing it.
    fn download(&self, url: &str, destination: &Path) -> Result<(), AppError>;
}
