//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitMenuError`], the single error type used by every
//! git-menu operation. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the variants that carry context.
//!
//! # Public API
//! - [`GitMenuError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitMenuError>`
//!
//! # Error Categories
//! - **Repository access**: Repository not found, bare repository, git2 errors
//! - **Process execution**: git could not be started or exited non-zero
//! - **Configuration writes**: `git config` rejected a key
//! - **Interaction**: picker dismissed, no terminal, prompt I/O failures
//! - **Settings**: unreadable or malformed settings file

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-menu
#[derive(Error, Debug)]
pub enum GitMenuError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Process errors
    #[error("Failed to start '{program}': {source}")]
    CommandSpawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to set git config '{key}': {message}")]
    ConfigWriteFailed { key: String, message: String },

    // Interaction errors
    #[error("Selection dismissed")]
    PickerDismissed,

    #[error("git-menu needs an interactive terminal")]
    NotInteractive,

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    // Settings errors
    #[error("Failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using GitMenuError
pub type Result<T> = std::result::Result<T, GitMenuError>;

impl GitMenuError {
    /// Create a spawn error for the given program
    pub fn command_spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            program: program.into(),
            source,
        }
    }

    /// Create a failed command error; stderr is kept verbatim apart from trailing whitespace
    pub fn command_failed(command: impl Into<String>, stderr: impl AsRef<str>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.as_ref().trim_end().to_string(),
        }
    }

    /// Create a config write error for a key
    pub fn config_write_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigWriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a settings read error
    pub fn settings_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsRead {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse error
    pub fn settings_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParse {
            path: path.into(),
            source,
        }
    }

    /// True for errors that only mean the user walked away from a prompt
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::PickerDismissed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitMenuError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_command_failed_keeps_stderr() {
        let err = GitMenuError::command_failed(
            "git fetch nowhere",
            "fatal: 'nowhere' does not appear to be a git repository\n",
        );
        assert_eq!(
            err.to_string(),
            "git fetch nowhere failed: fatal: 'nowhere' does not appear to be a git repository"
        );
    }

    #[test]
    fn test_command_spawn_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = GitMenuError::command_spawn("/opt/missing/git", io_err);
        assert!(err.to_string().contains("/opt/missing/git"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_config_write_failed() {
        let err = GitMenuError::config_write_failed("branch.main.remote", "could not lock config file");
        assert!(err.to_string().contains("branch.main.remote"));
        assert!(err.to_string().contains("could not lock config file"));
    }

    #[test]
    fn test_settings_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ broken").unwrap_err();
        let err = GitMenuError::settings_parse("/test/config.json", json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_only_dismissal_is_cancellation() {
        assert!(GitMenuError::PickerDismissed.is_cancellation());
        assert!(!GitMenuError::NotInGitRepo.is_cancellation());
        assert!(!GitMenuError::command_failed("git pull", "boom").is_cancellation());
    }
}
