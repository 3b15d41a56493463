use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ToolEnv};

/// A command line to spawn: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    pub fn for_path(program: &Path) -> Self {
        Self::new(program.to_string_lossy())
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Spawns external tools with an explicit environment.
pub trait ProcessRunner {
    /// Run to completion with inherited stdio. A non-zero exit is an error.
    fn run(&self, invocation: &Invocation, env: &ToolEnv) -> Result<(), AppError>;

    /// Run to completion and return captured stdout. A non-zero exit is an error.
    fn capture(&self, invocation: &Invocation, env: &ToolEnv) -> Result<String, AppError>;

    /// Locate `program` on the `PATH` of `env`.
    fn which(&self, program: &str, env: &ToolEnv) -> Option<PathBuf>;

    /// Run as a probe: success means the tool is usable, any failure means it is not.
    fn probe(&self, invocation: &Invocation, env: &ToolEnv) -> bool {
        self.run(invocation, env).is_ok()
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation, env: &ToolEnv) -> Result<(), AppError> {
        (**self).run(invocation, env)
    }

    fn capture(&self, invocation: &Invocation, env: &ToolEnv) -> Result<String, AppError> {
        (**self).capture(invocation, env)
    }

    fn which(&self, program: &str, env: &ToolEnv) -> Option<PathBuf> {
        (**self).which(program, env)
    }
}
