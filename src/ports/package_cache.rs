use std::path::Path;

use crate::domain::{AppError, PackageReference};

/// Local package-manager cache receiving exported recipes.
pub trait PackageCache {
    /// Export the recipe found in `project_dir` under `reference`.
    fn export(&self, project_dir: &Path, reference: &PackageReference) -> Result<(), AppError>;
}
