use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::InstallerDownloader;

/// Writes a placeholder file instead of downloading.
#[derive(Default)]
pub struct FakeDownloader {
    pub downloads: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }
}

impl InstallerDownloader for FakeDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        fs::write(destination, b"installer")?;
        self.downloads.lock().unwrap().push((url.to_string(), destination.to_path_buf()));
        Ok(())
    }
}
