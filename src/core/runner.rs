//! Process runner for the external git executable.
//!
//! Every fetch, pull and config write ends up here as one spawned process.
//! Failures are never retried: a fetch or pull that already touched the
//! network is handed back to the user exactly as git reported it.
//!
//! # Public API
//! - [`CommandRunner`]: Seam used by the menus so tests can record argv
//! - [`GitRunner`]: Real implementation backed by `std::process::Command`
//! - [`RunResult`]: Captured output of a successful run

use crate::core::error::{GitMenuError, Result};
use std::path::Path;
use std::process::Command;

/// Captured output of a process that exited successfully
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunResult {
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    /// stdout followed by stderr, trimmed. git prints fetch progress on stderr.
    pub fn combined_output(&self) -> String {
        let stdout = self.stdout.trim();
        let stderr = self.stderr.trim();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, _) => stderr.to_string(),
            (false, true) => stdout.to_string(),
            (false, false) => format!("{stdout}\n{stderr}"),
        }
    }
}

pub trait CommandRunner {
    /// Run the external tool once with `args` inside `workdir`
    fn run(&self, workdir: &Path, args: &[String]) -> Result<RunResult>;
}

/// Runs the configured git executable
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: String,
}

impl GitRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn describe(&self, args: &[String]) -> String {
        let mut command = self.program.clone();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl CommandRunner for GitRunner {
    fn run(&self, workdir: &Path, args: &[String]) -> Result<RunResult> {
        log::debug!(
            "Running {} {:?} in {}",
            self.program,
            args,
            workdir.display()
        );

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| GitMenuError::command_spawn(&self.program, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            log::debug!("{} exited with {}", self.program, output.status);
            return Err(GitMenuError::command_failed(self.describe(args), stderr));
        }

        Ok(RunResult {
            args: args.to_vec(),
            stdout,
            stderr,
        })
    }
}
