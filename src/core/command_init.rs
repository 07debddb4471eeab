//! Centralized initialization for the menu commands.
//!
//! Both `fetch` and `pull` start the same way: find the repository, load the
//! settings, pick the git executable and take a fresh snapshot of the
//! repository state. [`CommandInit`] does that once for both.
//!
//! # Initialization Steps
//! 1. **Git repository validation**: Ensure the directory is inside a work tree
//! 2. **Settings**: Load the optional settings file
//! 3. **Runner**: Resolve the git executable (CLI flag beats settings)
//! 4. **Snapshot**: Read HEAD, remotes, refs and submodules

use crate::core::{
    config::Settings,
    error::Result,
    git::GitRepo,
    runner::GitRunner,
    state::RepoState,
};
use std::path::{Path, PathBuf};

/// Everything a menu command needs before it can show anything
pub struct CommandContext {
    pub repository: RepoState,
    pub runner: GitRunner,
    pub settings: Settings,
}

/// Command-line overrides shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub directory: Option<PathBuf>,
    pub git_path: Option<String>,
}

pub struct CommandInit;

impl CommandInit {
    /// Initialize with settings from the user's config directory
    pub fn initialize(options: &CommandOptions) -> Result<CommandContext> {
        let settings = Settings::load()?;
        Self::initialize_with_settings(options, settings)
    }

    pub fn initialize_with_settings(
        options: &CommandOptions,
        settings: Settings,
    ) -> Result<CommandContext> {
        let directory = match &options.directory {
            Some(directory) => directory.clone(),
            None => std::env::current_dir()?,
        };

        let git_repo = GitRepo::open(&directory)?;
        let repository = git_repo.snapshot()?;

        let program = options
            .git_path
            .clone()
            .unwrap_or_else(|| settings.git_path.clone());
        log::debug!(
            "Initialized command in {} using '{program}'",
            repository.workdir.display()
        );

        Ok(CommandContext {
            repository,
            runner: GitRunner::new(program),
            settings,
        })
    }

    /// Snapshot a repository at `path` with default settings
    pub fn at(path: &Path) -> Result<CommandContext> {
        let options = CommandOptions {
            directory: Some(path.to_path_buf()),
            git_path: None,
        };
        Self::initialize_with_settings(&options, Settings::default())
    }
}
