use std::path::Path;

use crate::domain::{AppError, PackageReference, ToolEnv};
use crate::ports::{Invocation, PackageCache, ProcessRunner};

/// Local Conan cache driven through the `conan` CLI.
#[derive(Debug, Clone)]
pub struct ConanCli<R: ProcessRunner> {
    runner: R,
    env: ToolEnv,
}

impl<R: ProcessRunner> ConanCli<R> {
    pub fn new(runner: R, env: ToolEnv) -> Self {
        Self { runner, env }
    }
}

impl<R: ProcessRunner> PackageCache for ConanCli<R> {
    fn export(&self, project_dir: &Path, reference: &PackageReference) -> Result<(), AppError> {
        let invocation =
            Invocation::new("conan").arg("export").path_arg(project_dir).arg(reference.to_string());
        self.runner.run(&invocation, &self.env)
    }
}
