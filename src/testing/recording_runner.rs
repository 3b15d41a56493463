use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, ToolEnv};
use crate::ports::{Invocation, ProcessRunner};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub env: ToolEnv,
}

/// Records every invocation instead of spawning it.
///
/// Commands are matched by their rendered command line.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    failures: Mutex<HashMap<String, usize>>,
    outputs: Mutex<HashMap<String, String>>,
    programs: Mutex<HashMap<String, PathBuf>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit unsuccessfully every time.
    pub fn fail_on(&self, command: &str) {
        self.fail_times(command, usize::MAX);
    }

    /// Make `command` exit unsuccessfully for its first `times` runs.
    pub fn fail_times(&self, command: &str, times: usize) {
        self.failures.lock().unwrap().insert(command.to_string(), times);
    }

    pub fn respond(&self, command: &str, stdout: &str) {
        self.outputs.lock().unwrap().insert(command.to_string(), stdout.to_string());
    }

    /// Make `program` discoverable through `which`.
    pub fn install(&self, program: &str) {
        let path = PathBuf::from("/fake/bin").join(program);
        self.programs.lock().unwrap().insert(program.to_string(), path);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.command).collect()
    }

    /// Most recent call of `command`.
    pub fn last_call(&self, command: &str) -> Option<RecordedCall> {
        self.calls().into_iter().rev().find(|call| call.command == command)
    }

    fn record(&self, invocation: &Invocation, env: &ToolEnv) -> Result<(), AppError> {
        let command = invocation.to_string();
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.clone(),
            cwd: invocation.cwd().map(PathBuf::from),
            env: env.clone(),
        });

        let mut failures = self.failures.lock().unwrap();
        if let Some(remaining) = failures.get_mut(&command) {
            if *remaining > 0 {
                if *remaining != usize::MAX {
                    *remaining -= 1;
                }
                return Err(AppError::subprocess(command, "exited with exit status: 1"));
            }
        }
        Ok(())
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, env: &ToolEnv) -> Result<(), AppError> {
        self.record(invocation, env)
    }

    fn capture(&self, invocation: &Invocation, env: &ToolEnv) -> Result<String, AppError> {
        self.record(invocation, env)?;
        let outputs = self.outputs.lock().unwrap();
        Ok(outputs.get(&invocation.to_string()).cloned().unwrap_or_default())
    }

    fn which(&self, program: &str, _env: &ToolEnv) -> Option<PathBuf> {
        self.programs.lock().unwrap().get(program).cloned()
    }
}
