use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

mod common;
use common::repository::*;

/// Binary under test with settings isolated from the user's config
fn git_menu(config_home: &TempDir) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("git-menu")?;
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    Ok(cmd)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() -> anyhow::Result<()> {
        let config_home = TempDir::new()?;
        git_menu(&config_home)?
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("fetch"))
            .stdout(predicate::str::contains("pull"));
        Ok(())
    }

    #[test]
    fn test_fetch_not_in_git_repo() -> anyhow::Result<()> {
        let config_home = TempDir::new()?;
        let temp_dir = TempDir::new()?;
        let non_repo_path = temp_dir.path().join("not-a-repo");
        std::fs::create_dir(&non_repo_path)?;

        git_menu(&config_home)?
            .arg("fetch")
            .current_dir(non_repo_path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Not in a git repository"));
        Ok(())
    }

    #[test]
    fn test_pull_requires_terminal() -> anyhow::Result<()> {
        let config_home = TempDir::new()?;
        let (_temp_dir, repo_path) = setup_test_repo()?;

        git_menu(&config_home)?
            .arg("pull")
            .current_dir(&repo_path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("needs an interactive terminal"));
        Ok(())
    }

    #[test]
    fn test_directory_flag_selects_repository() -> anyhow::Result<()> {
        let config_home = TempDir::new()?;
        let (_temp_dir, repo_path) = setup_test_repo()?;
        let elsewhere = TempDir::new()?;

        // Gets past repository discovery and stops at the terminal check
        git_menu(&config_home)?
            .arg("-C")
            .arg(&repo_path)
            .arg("fetch")
            .current_dir(elsewhere.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("needs an interactive terminal"));
        Ok(())
    }

    // Settings live under XDG_CONFIG_HOME only on Linux
    #[cfg(target_os = "linux")]
    #[test]
    fn test_malformed_settings_file() -> anyhow::Result<()> {
        let config_home = TempDir::new()?;
        let settings_dir = config_home.path().join("git-menu");
        std::fs::create_dir_all(&settings_dir)?;
        std::fs::write(settings_dir.join("config.json"), "{ not json")?;
        let (_temp_dir, repo_path) = setup_test_repo()?;

        git_menu(&config_home)?
            .arg("fetch")
            .current_dir(&repo_path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed to parse settings file"));
        Ok(())
    }
}
