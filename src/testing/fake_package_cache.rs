use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, PackageReference};
use crate::ports::PackageCache;

#[derive(Default)]
pub struct FakePackageCache {
    pub exported: Mutex<Vec<(PathBuf, String)>>,
}

impl FakePackageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn references(&self) -> Vec<String> {
        self.exported.lock().unwrap().iter().map(|(_, reference)| reference.clone()).collect()
    }
}

impl PackageCache for FakePackageCache {
    fn export(&self, project_dir: &Path, reference: &PackageReference) -> Result<(), AppError> {
        self.exported.lock().unwrap().push((project_dir.to_path_buf(), reference.to_string()));
        Ok(())
    }
}
