use crate::commands::report_outcome;
use crate::commands::tracking::{remote_items, resolve_push_remote, resolve_upstream};
use crate::core::{
    command_init::{CommandInit, CommandOptions},
    config::MenuSettings,
    error::{GitMenuError, Result},
    menu::{show_menu, Action, MenuDefinition, MenuItem, MenuState, Outcome, Session, Switch},
    picker::pick_or_enter,
    prompt::TerminalPrompter,
    state::RepoState,
    text::branch_ref,
};

pub fn execute_fetch(options: &CommandOptions) -> Result<()> {
    let context = CommandInit::initialize(options)?;
    let mut prompter = TerminalPrompter::new()?;
    let mut session = Session::new(&mut prompter, &context.runner);

    let outcome = fetching(&mut session, context.repository, &context.settings.fetch)?;
    report_outcome(context.runner.program(), &outcome);
    Ok(())
}

/// Show the fetch menu for `repository` and run the chosen fetch
pub fn fetching(
    session: &mut Session<'_>,
    repository: RepoState,
    settings: &MenuSettings,
) -> Result<Outcome> {
    let menu = fetch_menu(&repository);
    let switches = settings.apply(fetch_switches());
    show_menu(session, &menu, MenuState::new(repository, switches))
}

pub fn fetch_switches() -> Vec<Switch> {
    vec![Switch::new('p', "--prune", "Prune deleted branches")]
}

/// Build the fetch menu from the current HEAD configuration
pub fn fetch_menu(repository: &RepoState) -> MenuDefinition {
    let head = &repository.head;
    let mut items = Vec::new();

    items.push(match &head.push_remote {
        Some(push_remote) => MenuItem::new(
            'p',
            push_remote.to_string(),
            Action::Run(fetch_from_push_remote),
        ),
        None => MenuItem::new(
            'p',
            "pushRemote, after setting that",
            Action::ResolveThen {
                resolve: resolve_push_remote,
                then: fetch_from_push_remote,
            },
        ),
    });

    items.push(match &head.upstream {
        Some(upstream) => MenuItem::new('u', upstream.to_string(), Action::Run(fetch_from_upstream)),
        None => MenuItem::new(
            'u',
            "@{upstream}, after setting that",
            Action::ResolveThen {
                resolve: resolve_upstream,
                then: fetch_from_upstream,
            },
        ),
    });

    items.push(MenuItem::new('e', "elsewhere", Action::Run(fetch_from_elsewhere)));
    items.push(MenuItem::new('a', "all remotes", Action::Run(fetch_all)));
    items.push(MenuItem::new('o', "another branch", Action::Run(fetch_another_branch)));

    if !repository.submodules.is_empty() {
        items.push(MenuItem::new('s', "submodules", Action::Run(fetch_submodules)));
    }

    MenuDefinition::new("Fetching", items)
}

fn fetch_args(state: &MenuState, targets: &[&str]) -> Vec<String> {
    let mut args = vec!["fetch".to_string()];
    args.extend(state.switch_args());
    args.extend(targets.iter().map(|target| target.to_string()));
    args
}

fn fetch_from_push_remote(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let Some(push_remote) = &state.repository.head.push_remote else {
        log::debug!("No push remote configured");
        return Ok(Outcome::Cancelled);
    };
    if state.repository.find_remote(&push_remote.remote).is_none() {
        log::warn!("pushRemote '{}' is not a configured remote", push_remote.remote);
    }
    let args = fetch_args(state, &[&push_remote.remote]);
    session.run(&state.repository, args)
}

fn fetch_from_upstream(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let Some(upstream) = &state.repository.head.upstream else {
        log::debug!("No upstream configured");
        return Ok(Outcome::Cancelled);
    };
    let args = fetch_args(state, &[&upstream.remote]);
    session.run(&state.repository, args)
}

fn fetch_from_elsewhere(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let remotes = remote_items(&state.repository);
    let remote = pick_or_enter(&mut *session.prompter, &remotes, "Fetch from")?
        .ok_or(GitMenuError::PickerDismissed)?;
    let args = fetch_args(state, &[&remote]);
    session.run(&state.repository, args)
}

fn fetch_all(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let args = fetch_args(state, &["--all"]);
    session.run(&state.repository, args)
}

fn fetch_another_branch(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let Some(remote) = session.prompter.input("Fetch from remote or url")? else {
        return Ok(Outcome::Cancelled);
    };
    let Some(branch) = session.prompter.input("Fetch branch")? else {
        return Ok(Outcome::Cancelled);
    };
    let args = fetch_args(state, &[&remote, &branch_ref(&branch)]);
    session.run(&state.repository, args)
}

fn fetch_submodules(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let mut args = vec![
        "fetch".to_string(),
        "--verbose".to_string(),
        "--recurse-submodules".to_string(),
    ];
    args.extend(state.switch_args());
    session.run(&state.repository, args)
}
