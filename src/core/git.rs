//! Repository state reading and config writes.
//!
//! This module provides the read side of git-menu through the [`GitRepo`] struct.
//! It wraps the `git2` library to snapshot everything the fetch and pull menus
//! look at: HEAD with its upstream and push remote, the configured remotes,
//! every ref, and the registered submodules. All reads are local; nothing here
//! talks to the network.
//!
//! Writes go the other way: [`set_config_variable`] shells out to `git config`
//! through a [`CommandRunner`] so that the external tool stays the only writer
//! of the repository's configuration.
//!
//! # Public API
//! - [`GitRepo`]: Repository discovery and state snapshots
//! - [`set_config_variable`]: Persist one config key through the runner

use crate::core::{
    error::{GitMenuError, Result},
    runner::CommandRunner,
    state::{Head, Ref, RefKind, Remote, RemoteBranch, RemoteLink, RepoState, Submodule},
};
use git2::{BranchType, Repository};
use std::path::{Path, PathBuf};

const HEADS_PREFIX: &str = "refs/heads/";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("Repository discovery failed: {e}");
            GitMenuError::NotInGitRepo
        })?;
        if repo.is_bare() {
            return Err(GitMenuError::BareRepository);
        }
        Ok(GitRepo { repo })
    }

    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or(GitMenuError::BareRepository)
    }

    /// Read everything the menus need into a fresh [`RepoState`]
    pub fn snapshot(&self) -> Result<RepoState> {
        let state = RepoState {
            workdir: self.workdir()?,
            head: self.read_head()?,
            remotes: self.read_remotes()?,
            refs: self.read_refs()?,
            submodules: self.read_submodules()?,
        };

        log::debug!(
            "Snapshot: head={:?}, {} remotes, {} refs, {} submodules",
            state.head.name,
            state.remotes.len(),
            state.refs.len(),
            state.submodules.len()
        );

        Ok(state)
    }

    pub fn read_head(&self) -> Result<Head> {
        // HEAD may point at an unborn branch, so read the symbolic target
        // instead of resolving it.
        let head_ref = self.repo.find_reference("HEAD")?;
        let name = head_ref
            .symbolic_target()
            .and_then(|target| target.strip_prefix(HEADS_PREFIX))
            .map(str::to_string);

        let commit = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .map(|oid| oid.to_string());

        let (upstream, push_remote) = match &name {
            Some(branch) => (self.read_upstream(branch)?, self.read_push_remote(branch)?),
            None => (None, None),
        };

        Ok(Head {
            name,
            commit,
            upstream,
            push_remote,
        })
    }

    fn read_upstream(&self, branch: &str) -> Result<Option<RemoteLink>> {
        let config = self.repo.config()?.snapshot()?;
        let remote = config.get_string(&format!("branch.{branch}.remote")).ok();
        let merge = config.get_string(&format!("branch.{branch}.merge")).ok();

        Ok(match (remote, merge) {
            (Some(remote), Some(merge)) => {
                let name = merge.strip_prefix(HEADS_PREFIX).unwrap_or(&merge);
                Some(RemoteLink::new(remote, name))
            }
            _ => None,
        })
    }

    fn read_push_remote(&self, branch: &str) -> Result<Option<RemoteLink>> {
        let config = self.repo.config()?.snapshot()?;
        let remote = config
            .get_string(&format!("branch.{branch}.pushRemote"))
            .or_else(|_| config.get_string("remote.pushDefault"))
            .ok();

        Ok(remote.map(|remote| RemoteLink::new(remote, branch)))
    }

    pub fn read_remotes(&self) -> Result<Vec<Remote>> {
        let names: Vec<String> = self
            .repo
            .remotes()?
            .iter()
            .flatten()
            .map(str::to_string)
            .collect();
        let tracking = self.remote_tracking_branches()?;

        let mut remotes = Vec::with_capacity(names.len());
        for name in names {
            let remote = self.repo.find_remote(&name)?;
            let fetch_url = remote.url().map(str::to_string);
            let push_url = remote.pushurl().map(str::to_string).or(fetch_url.clone());
            let prefix = format!("{name}/");
            let branches = tracking
                .iter()
                .filter(|branch| branch.name.starts_with(&prefix))
                .cloned()
                .collect();

            remotes.push(Remote {
                name,
                fetch_url,
                push_url,
                branches,
            });
        }

        Ok(remotes)
    }

    fn remote_tracking_branches(&self) -> Result<Vec<RemoteBranch>> {
        let mut branches = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            let Some(name) = branch.name()? else {
                continue;
            };
            // `<remote>/HEAD` is a symbolic alias, not a branch
            if name.ends_with("/HEAD") {
                continue;
            }
            branches.push(RemoteBranch {
                name: name.to_string(),
                commit: branch.get().target().map(|oid| oid.to_string()),
            });
        }
        Ok(branches)
    }

    pub fn read_refs(&self) -> Result<Vec<Ref>> {
        let remote_names: Vec<String> = self
            .repo
            .remotes()?
            .iter()
            .flatten()
            .map(str::to_string)
            .collect();

        let mut refs = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                refs.push(Ref {
                    name: name.to_string(),
                    kind: RefKind::Head,
                    remote: None,
                    commit: branch.get().target().map(|oid| oid.to_string()),
                });
            }
        }

        for branch in self.remote_tracking_branches()? {
            let remote = remote_names
                .iter()
                .find(|remote| branch.name.starts_with(&format!("{remote}/")))
                .cloned();
            refs.push(Ref {
                name: branch.name,
                kind: RefKind::RemoteHead,
                remote,
                commit: branch.commit,
            });
        }

        for tag in self.repo.tag_names(None)?.iter().flatten() {
            let commit = self
                .repo
                .find_reference(&format!("refs/tags/{tag}"))
                .ok()
                .and_then(|reference| reference.peel_to_commit().ok())
                .map(|commit| commit.id().to_string());
            refs.push(Ref {
                name: tag.to_string(),
                kind: RefKind::Tag,
                remote: None,
                commit,
            });
        }

        Ok(refs)
    }

    pub fn read_submodules(&self) -> Result<Vec<Submodule>> {
        Ok(self
            .repo
            .submodules()?
            .iter()
            .map(|submodule| Submodule {
                name: submodule.name().unwrap_or_default().to_string(),
                path: submodule.path().to_path_buf(),
            })
            .collect())
    }
}

/// Write one configuration key through the external tool
pub fn set_config_variable(
    runner: &dyn CommandRunner,
    repository: &RepoState,
    key: &str,
    value: &str,
) -> Result<()> {
    log::debug!("Setting git config {key} = {value}");

    let args = vec!["config".to_string(), key.to_string(), value.to_string()];
    runner
        .run(&repository.workdir, &args)
        .map(|_| ())
        .map_err(|e| match e {
            GitMenuError::CommandFailed { stderr, .. } => {
                GitMenuError::config_write_failed(key, stderr)
            }
            other => other,
        })
}
