//! Git repository management and setup utilities
//!
//! Provides functions for creating a working repository wired to a bare
//! `origin`, and for driving a second clone that pushes changes into it.

#![allow(dead_code)]

use git_menu::core::error::{GitMenuError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A working repository and its bare `origin`, both inside one temp dir.
/// The TempDir must be kept alive for the duration of the test.
pub struct TestRemoteRepo {
    pub temp_dir: TempDir,
    pub work: PathBuf,
    pub origin: PathBuf,
}

impl TestRemoteRepo {
    pub fn path(&self) -> &Path {
        &self.work
    }
}

/// Runs git in `path` and returns trimmed stdout, failing on non-zero exit
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .map_err(GitMenuError::Io)?;

    if !output.status.success() {
        return Err(GitMenuError::command_failed(
            format!("git {}", args.join(" ")),
            String::from_utf8_lossy(&output.stderr),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn configure_identity(path: &Path) -> Result<()> {
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

pub fn commit_file(path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    fs::write(path.join(filename), content).map_err(GitMenuError::Io)?;
    git(path, &["add", filename])?;
    git(path, &["commit", "-m", message])?;
    Ok(())
}

/// Sets up a fresh git repository with one commit and no remotes
pub fn setup_test_repo() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new().map_err(GitMenuError::Io)?;
    let repo_path = temp_dir.path().join("work");
    fs::create_dir(&repo_path).map_err(GitMenuError::Io)?;

    git(&repo_path, &["init", "-b", "main"])?;
    configure_identity(&repo_path)?;
    commit_file(&repo_path, "initial.txt", "initial content\n", "Initial commit")?;

    Ok((temp_dir, repo_path))
}

/// Sets up a working repository whose `main` has been pushed to a bare
/// `origin`, without configuring an upstream.
pub fn setup_repo_with_origin() -> Result<TestRemoteRepo> {
    let (temp_dir, work) = setup_test_repo()?;
    let origin = temp_dir.path().join("origin.git");

    git(temp_dir.path(), &["init", "--bare", "-b", "main", "origin.git"])?;
    git(&work, &["remote", "add", "origin", &origin.to_string_lossy()])?;
    git(&work, &["push", "origin", "main"])?;

    Ok(TestRemoteRepo {
        temp_dir,
        work,
        origin,
    })
}

/// Clones `origin` next to the working repository, ready to push from
pub fn clone_origin(repo: &TestRemoteRepo, name: &str) -> Result<PathBuf> {
    let origin = repo.origin.to_string_lossy().to_string();
    git(repo.temp_dir.path(), &["clone", &origin, name])?;
    let clone = repo.temp_dir.path().join(name);
    configure_identity(&clone)?;
    Ok(clone)
}

/// Reads a config key, `None` when unset
pub fn config_value(path: &Path, key: &str) -> Option<String> {
    git(path, &["config", "--get", key]).ok()
}
