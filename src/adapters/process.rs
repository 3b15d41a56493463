use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::{AppError, ToolEnv};
use crate::ports::{Invocation, ProcessRunner};

/// Spawns real processes through `std::process::Command`.
///
/// The child environment is exactly the given `ToolEnv`; bare program names are
/// resolved against that environment's `PATH` rather than the parent's.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(&self, invocation: &Invocation, env: &ToolEnv) -> Command {
        let program = if has_path_component(invocation.program()) {
            PathBuf::from(invocation.program())
        } else {
            self.which(invocation.program(), env)
                .unwrap_or_else(|| PathBuf::from(invocation.program()))
        };

        let mut command = Command::new(program);
        command.args(invocation.arguments()).env_clear().envs(env.vars());
        if let Some(dir) = invocation.cwd() {
            command.current_dir(dir);
        }
        command
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation, env: &ToolEnv) -> Result<(), AppError> {
        info!("> {}", invocation);
        let status = self
            .command(invocation, env)
            .status()
            .map_err(|e| AppError::subprocess(invocation, e.to_string()))?;

        if !status.success() {
            return Err(AppError::subprocess(invocation, format!("exited with {status}")));
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation, env: &ToolEnv) -> Result<String, AppError> {
        info!("> {}", invocation);
        let output = self
            .command(invocation, env)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| AppError::subprocess(invocation, e.to_string()))?;

        if !output.status.success() {
            return Err(AppError::subprocess(invocation, format!("exited with {}", output.status)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn which(&self, program: &str, env: &ToolEnv) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let found = which::which_in(program, env.path(), cwd).ok();
        debug!("which {} -> {:?}", program, found);
        found
    }
}

fn has_path_component(program: &str) -> bool {
    Path::new(program).components().count() > 1
}
