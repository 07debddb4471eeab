//! Git Menu - menu-driven `git fetch` and `git pull` for the terminal.
//!
//! The library reads repository state with `git2`, presents a menu of fetch or
//! pull targets plus toggleable switches, and turns the choice into a single
//! invocation of the git executable. Missing upstream or push-remote settings
//! are picked interactively and written through `git config` first.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository snapshots and config writes
//! - The menu/switch engine and single-choice picker
//! - The process runner
//! - Error handling and result types
//!
//! The fetch and pull menus themselves live in [`commands`].

pub mod commands;
pub mod core;

pub use crate::core::{
    // Menu engine
    show_menu,
    switches_to_args,
    Action,
    // Command initialization
    CommandInit,
    CommandOptions,
    // Process runner
    CommandRunner,
    // Error handling
    GitMenuError,
    // Repository access
    GitRepo,
    GitRunner,
    MenuDefinition,
    MenuState,
    Outcome,
    PickItem,
    Prompter,
    RepoState,
    Result,
    Session,
    Settings,
    Switch,
};
