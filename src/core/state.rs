//! In-memory repository state read by the menus.
//!
//! A [`RepoState`] is a snapshot taken through [`GitRepo`](crate::core::git::GitRepo)
//! right before a menu is built. Nothing here touches disk; the only mutation
//! is the cached upstream or push remote a command records after writing it
//! to git's config.
//!
//! # Public API
//! - [`RepoState`]: The repository handle threaded through every menu action
//! - [`Head`]: Current branch plus its optional upstream and push-remote links
//! - [`Remote`] / [`RemoteBranch`]: Configured remotes and their tracking branches
//! - [`Ref`] / [`RefKind`]: Local branches, remote-tracking branches and tags
//! - [`Submodule`]: Registered submodules

use std::path::PathBuf;

/// A `(remote, branch)` pair such as an upstream or push target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLink {
    pub remote: String,
    pub name: String,
}

impl RemoteLink {
    pub fn new(remote: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RemoteLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.remote, self.name)
    }
}

/// Current HEAD. `name` is `None` when HEAD is detached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Head {
    pub name: Option<String>,
    pub commit: Option<String>,
    pub upstream: Option<RemoteLink>,
    pub push_remote: Option<RemoteLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBranch {
    /// Full tracking name, e.g. `origin/main`
    pub name: String,
    pub commit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub fetch_url: Option<String>,
    pub push_url: Option<String>,
    pub branches: Vec<RemoteBranch>,
}

/// Ref kinds, ordered so that sorting descending puts remote-tracking refs
/// ahead of local branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefKind {
    Head,
    RemoteHead,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref {
    pub name: String,
    pub kind: RefKind,
    pub remote: Option<String>,
    pub commit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoState {
    pub workdir: PathBuf,
    pub head: Head,
    pub remotes: Vec<Remote>,
    pub refs: Vec<Ref>,
    pub submodules: Vec<Submodule>,
}

impl RepoState {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            head: Head::default(),
            remotes: Vec::new(),
            refs: Vec::new(),
            submodules: Vec::new(),
        }
    }

    /// Name of the checked-out branch, if any
    pub fn branch_name(&self) -> Option<&str> {
        self.head.name.as_deref()
    }

    pub fn find_remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|remote| remote.name == name)
    }
}
