//! Upstream and push-remote resolution shared by fetch and pull.
//!
//! Both menus offer "set X, then fetch/pull" when HEAD lacks an upstream or a
//! push remote. The resolvers here pick the missing link, write it to git's
//! config, and cache it on the in-memory HEAD so the follow-up handler can use
//! it without re-reading the repository.

use crate::core::{
    error::{GitMenuError, Result},
    git::set_config_variable,
    menu::{MenuState, Resolution, Session},
    picker::{pick, PickItem},
    state::{Ref, RefKind, RemoteLink, RepoState},
    text::{branch_ref, remote_branch_segments, short_hash},
};

/// Candidates for a new upstream of the current branch.
///
/// If the first remote has no `<remote>/<branch>` ref yet, one is synthesized
/// and put first. Tags and the branch itself are never offered. Remote
/// branches sort ahead of local ones; order is otherwise preserved.
pub fn upstream_candidates(repository: &RepoState) -> Vec<PickItem<Ref>> {
    let head_name = repository.branch_name();
    let mut choices = repository.refs.clone();

    if let (Some(first), Some(branch)) = (repository.remotes.first(), head_name) {
        let expected = format!("{}/{}", first.name, branch);
        if !choices.iter().any(|r| r.name == expected) {
            choices.insert(
                0,
                Ref {
                    name: expected,
                    kind: RefKind::RemoteHead,
                    remote: Some(first.name.clone()),
                    commit: None,
                },
            );
        }
    }

    choices.retain(|r| r.kind != RefKind::Tag && Some(r.name.as_str()) != head_name);
    choices.sort_by(|a, b| b.kind.cmp(&a.kind));

    choices
        .into_iter()
        .map(|r| {
            let hash = short_hash(r.commit.as_deref());
            PickItem::new(r.name.clone(), r).with_description(hash)
        })
        .collect()
}

/// Remotes as picker rows, described by their push url
pub fn remote_items(repository: &RepoState) -> Vec<PickItem<String>> {
    repository
        .remotes
        .iter()
        .map(|remote| {
            PickItem::new(remote.name.clone(), remote.name.clone())
                .with_description(remote.push_url.clone().unwrap_or_default())
        })
        .collect()
}

/// Pick and persist an upstream. Dismissing the picker abandons quietly.
pub fn resolve_upstream(session: &mut Session<'_>, state: &mut MenuState) -> Result<Resolution> {
    let Some(branch) = state.repository.branch_name().map(str::to_string) else {
        log::warn!("HEAD is detached; not setting an upstream");
        return Ok(Resolution::Abandoned);
    };

    let candidates = upstream_candidates(&state.repository);
    if candidates.is_empty() {
        log::info!("No branches to track");
    }
    let Some(chosen) = pick(&mut *session.prompter, &candidates, "Set upstream")? else {
        log::debug!("Upstream selection dismissed");
        return Ok(Resolution::Abandoned);
    };

    let (remote, name) = match chosen.kind {
        // A local upstream is tracked through the "." remote
        RefKind::Head => (".".to_string(), chosen.name.clone()),
        _ => match remote_branch_segments(&chosen.name) {
            Some((remote, name)) => (remote.to_string(), name.to_string()),
            None => {
                log::debug!("'{}' is not a remote/branch name", chosen.name);
                return Ok(Resolution::Abandoned);
            }
        },
    };

    set_config_variable(
        session.runner,
        &state.repository,
        &format!("branch.{branch}.merge"),
        &branch_ref(&name),
    )?;
    set_config_variable(
        session.runner,
        &state.repository,
        &format!("branch.{branch}.remote"),
        &remote,
    )?;

    state.repository.head.upstream = Some(RemoteLink::new(remote, name));
    Ok(Resolution::Resolved)
}

/// Pick and persist a push remote.
///
/// Unlike [`resolve_upstream`], dismissing this picker surfaces as
/// [`GitMenuError::PickerDismissed`] to whoever invoked the menu.
pub fn resolve_push_remote(
    session: &mut Session<'_>,
    state: &mut MenuState,
) -> Result<Resolution> {
    let Some(branch) = state.repository.branch_name().map(str::to_string) else {
        log::warn!("HEAD is detached; not setting a push remote");
        return Ok(Resolution::Abandoned);
    };

    let remotes = remote_items(&state.repository);
    if remotes.is_empty() {
        log::info!("No remotes configured");
    }
    let remote = pick(&mut *session.prompter, &remotes, "Set push remote")?
        .ok_or(GitMenuError::PickerDismissed)?;

    set_config_variable(
        session.runner,
        &state.repository,
        &format!("branch.{branch}.pushRemote"),
        &remote,
    )?;

    state.repository.head.push_remote = Some(RemoteLink::new(remote, branch));
    Ok(Resolution::Resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Head, Remote};
    use crate::core::testing::{argv, Answer, RecordingRunner, ScriptedPrompter};

    fn git_ref(name: &str, kind: RefKind, commit: Option<&str>) -> Ref {
        Ref {
            name: name.to_string(),
            kind,
            remote: None,
            commit: commit.map(str::to_string),
        }
    }

    fn remote(name: &str) -> Remote {
        Remote {
            name: name.to_string(),
            fetch_url: Some(format!("https://example.com/{name}.git")),
            push_url: Some(format!("https://example.com/{name}.git")),
            branches: Vec::new(),
        }
    }

    fn repository() -> RepoState {
        let mut repository = RepoState::new("/tmp/repo");
        repository.head = Head {
            name: Some("main".to_string()),
            ..Head::default()
        };
        repository.remotes = vec![remote("origin"), remote("upstream")];
        repository.refs = vec![
            git_ref("main", RefKind::Head, Some("1111111aaaa")),
            git_ref("feature", RefKind::Head, Some("2222222bbbb")),
            git_ref("v1.0", RefKind::Tag, Some("3333333cccc")),
            git_ref("upstream/main", RefKind::RemoteHead, Some("4444444dddd")),
        ];
        repository
    }

    fn labels(items: &[PickItem<Ref>]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_candidates_synthesize_first_remote_branch() {
        let items = upstream_candidates(&repository());
        assert_eq!(labels(&items), vec!["origin/main", "upstream/main", "feature"]);
        assert_eq!(items[0].payload.kind, RefKind::RemoteHead);
        assert_eq!(items[0].description, None);
        assert_eq!(items[1].description.as_deref(), Some("4444444"));
    }

    #[test]
    fn test_candidates_never_include_tags_or_head() {
        let items = upstream_candidates(&repository());
        assert!(items.iter().all(|item| item.payload.kind != RefKind::Tag));
        assert!(items.iter().all(|item| item.label != "main"));
    }

    #[test]
    fn test_existing_remote_branch_is_not_duplicated() {
        let mut repository = repository();
        repository
            .refs
            .push(git_ref("origin/main", RefKind::RemoteHead, Some("5555555eeee")));

        let items = upstream_candidates(&repository);
        let count = items.iter().filter(|item| item.label == "origin/main").count();
        assert_eq!(count, 1);
        assert_eq!(labels(&items), vec!["upstream/main", "origin/main", "feature"]);
    }

    #[test]
    fn test_no_remotes_means_no_synthesized_candidate() {
        let mut repository = repository();
        repository.remotes.clear();
        let items = upstream_candidates(&repository);
        assert_eq!(labels(&items), vec!["upstream/main", "feature"]);
    }

    #[test]
    fn test_resolve_upstream_writes_merge_then_remote() -> Result<()> {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([Answer::choose("origin/main")]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        let resolution = resolve_upstream(&mut session, &mut state)?;

        assert_eq!(resolution, Resolution::Resolved);
        assert_eq!(
            runner.calls(),
            vec![
                argv(&["config", "branch.main.merge", "refs/heads/main"]),
                argv(&["config", "branch.main.remote", "origin"]),
            ]
        );
        assert_eq!(
            state.repository.head.upstream,
            Some(RemoteLink::new("origin", "main"))
        );
        Ok(())
    }

    #[test]
    fn test_resolve_upstream_local_branch_uses_dot_remote() -> Result<()> {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([Answer::choose("feature")]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        resolve_upstream(&mut session, &mut state)?;

        assert_eq!(
            runner.calls(),
            vec![
                argv(&["config", "branch.main.merge", "refs/heads/feature"]),
                argv(&["config", "branch.main.remote", "."]),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_resolve_upstream_dismissed_writes_nothing() -> Result<()> {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([Answer::Dismiss]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        let resolution = resolve_upstream(&mut session, &mut state)?;

        assert_eq!(resolution, Resolution::Abandoned);
        assert!(runner.calls().is_empty());
        assert_eq!(state.repository.head.upstream, None);
        Ok(())
    }

    #[test]
    fn test_resolve_upstream_config_failure_stops_chain() {
        let runner = RecordingRunner::failing_on("config");
        let mut prompter = ScriptedPrompter::new([Answer::choose("origin/main")]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        let result = resolve_upstream(&mut session, &mut state);

        assert!(matches!(result, Err(GitMenuError::ConfigWriteFailed { .. })));
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(state.repository.head.upstream, None);
    }

    #[test]
    fn test_resolve_upstream_detached_head_abandons() -> Result<()> {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(Vec::new());
        let mut session = Session::new(&mut prompter, &runner);
        let mut repository = repository();
        repository.head.name = None;
        let mut state = MenuState::new(repository, Vec::new());

        assert_eq!(resolve_upstream(&mut session, &mut state)?, Resolution::Abandoned);
        assert!(runner.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_resolve_push_remote_writes_and_caches() -> Result<()> {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([Answer::choose("upstream")]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        resolve_push_remote(&mut session, &mut state)?;

        assert_eq!(
            runner.calls(),
            vec![argv(&["config", "branch.main.pushRemote", "upstream"])]
        );
        assert_eq!(
            state.repository.head.push_remote,
            Some(RemoteLink::new("upstream", "main"))
        );
        assert_eq!(
            prompter.shown_rows(0),
            [
                "origin  https://example.com/origin.git",
                "upstream  https://example.com/upstream.git"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_resolve_push_remote_dismissed_propagates() {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([Answer::Dismiss]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut state = MenuState::new(repository(), Vec::new());

        let result = resolve_push_remote(&mut session, &mut state);

        assert!(matches!(result, Err(GitMenuError::PickerDismissed)));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_resolve_push_remote_without_remotes_shows_nothing() {
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new([]);
        let mut session = Session::new(&mut prompter, &runner);
        let mut repository = repository();
        repository.remotes.clear();
        let mut state = MenuState::new(repository, Vec::new());

        let result = resolve_push_remote(&mut session, &mut state);

        assert!(matches!(result, Err(GitMenuError::PickerDismissed)));
        assert_eq!(prompter.prompts_shown(), 0);
        assert!(runner.calls().is_empty());
        assert_eq!(state.repository.head.push_remote, None);
    }
}
