//! Core functionality for the git-menu tool.
//!
//! This module provides the building blocks the fetch and pull commands are
//! made of: repository state, the process runner, the menu engine and picker,
//! settings, and error handling.

pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod menu;
pub mod output;
pub mod picker;
pub mod prompt;
pub mod runner;
pub mod state;
pub mod text;

#[doc(hidden)]
pub mod testing;

// === Error handling ===
pub use error::{GitMenuError, Result};

// === Repository access ===
// git2-backed snapshots plus config writes through the external tool
pub use git::{set_config_variable, GitRepo};
pub use state::{Head, Ref, RefKind, Remote, RemoteBranch, RemoteLink, RepoState, Submodule};

// === Process runner ===
pub use runner::{CommandRunner, GitRunner, RunResult};

// === Menu engine and picker ===
pub use menu::{
    show_menu, switches_to_args, Action, Handler, MenuDefinition, MenuItem, MenuState, Outcome,
    Resolution, Resolver, Session, Switch,
};
pub use picker::{pick, pick_or_enter, PickItem};
pub use prompt::{Prompter, TerminalPrompter};

// === Command initialization and settings ===
pub use command_init::{CommandContext, CommandInit, CommandOptions};
pub use config::{MenuSettings, Settings};

// === Output formatting ===
pub use output::{print_command_output, print_error, print_success};
