use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ProjectLayout, ToolEnv};
use crate::ports::{Invocation, ProcessRunner};

/// Create the project virtual environment unless its interpreter already exists.
pub(super) fn ensure_venv<R: ProcessRunner>(
    runner: &R,
    layout: &ProjectLayout,
    host_python: &str,
    env: &ToolEnv,
) -> Result<PathBuf, AppError> {
    let python = layout.venv_python();
    if python.exists() {
        debug!("Reusing virtual environment at {}", layout.venv_dir().display());
        return Ok(python);
    }

    let create = Invocation::new(host_python).args(["-m", "venv"]).path_arg(&layout.venv_dir());
    runner.run(&create, env)?;
    Ok(python)
}

pub(super) fn install_dependencies<R: ProcessRunner>(
    runner: &R,
    python: &Path,
    layout: &ProjectLayout,
    env: &ToolEnv,
) -> Result<(), AppError> {
    let pip = || Invocation::for_path(python).args(["-m", "pip", "install"]);

    runner.run(&pip().args(["--upgrade", "pip"]), env)?;
    runner.run(&pip().arg("-r").path_arg(&layout.requirements()), env)?;
    runner.run(&pip().arg("conan"), env)
}
