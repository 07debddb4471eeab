use crate::commands::report_outcome;
use crate::commands::tracking::{resolve_push_remote, resolve_upstream};
use crate::core::{
    command_init::{CommandInit, CommandOptions},
    config::MenuSettings,
    error::{GitMenuError, Result},
    menu::{show_menu, Action, MenuDefinition, MenuItem, MenuState, Outcome, Session, Switch},
    picker::{pick, PickItem},
    prompt::TerminalPrompter,
    state::RepoState,
    text::{remote_branch_segments, short_hash},
};

pub fn execute_pull(options: &CommandOptions) -> Result<()> {
    let context = CommandInit::initialize(options)?;
    let mut prompter = TerminalPrompter::new()?;
    let mut session = Session::new(&mut prompter, &context.runner);

    let outcome = pulling(&mut session, context.repository, &context.settings.pull)?;
    report_outcome(context.runner.program(), &outcome);
    Ok(())
}

/// Show the pull menu for `repository` and run the chosen pull
pub fn pulling(
    session: &mut Session<'_>,
    repository: RepoState,
    settings: &MenuSettings,
) -> Result<Outcome> {
    let menu = pull_menu(&repository);
    let switches = settings.apply(pull_switches());
    show_menu(session, &menu, MenuState::new(repository, switches))
}

pub fn pull_switches() -> Vec<Switch> {
    vec![Switch::new('r', "--rebase", "Rebase local commits")]
}

pub fn pull_menu(repository: &RepoState) -> MenuDefinition {
    let head = &repository.head;

    let push_item = match &head.push_remote {
        Some(push_remote) => MenuItem::new(
            'p',
            push_remote.to_string(),
            Action::Run(pull_from_push_remote),
        ),
        None => MenuItem::new(
            'p',
            "pushRemote, after setting that",
            Action::ResolveThen {
                resolve: resolve_push_remote,
                then: pull_from_push_remote,
            },
        ),
    };

    let upstream_item = match &head.upstream {
        Some(upstream) => MenuItem::new('u', upstream.to_string(), Action::Run(pull_from_upstream)),
        None => MenuItem::new(
            'u',
            "@{upstream}, after setting that",
            Action::ResolveThen {
                resolve: resolve_upstream,
                then: pull_from_upstream,
            },
        ),
    };

    MenuDefinition::new(
        "Pulling",
        vec![
            push_item,
            upstream_item,
            MenuItem::new('e', "elsewhere", Action::Run(pull_from_elsewhere)),
        ],
    )
}

/// Every remote-tracking branch as a `remote/branch` row
pub fn elsewhere_items(repository: &RepoState) -> Vec<PickItem<String>> {
    repository
        .remotes
        .iter()
        .flat_map(|remote| remote.branches.iter())
        .map(|branch| {
            PickItem::new(branch.name.clone(), branch.name.clone())
                .with_description(short_hash(branch.commit.as_deref()))
        })
        .collect()
}

fn pull_args(state: &MenuState, targets: &[&str]) -> Vec<String> {
    let mut args = vec!["pull".to_string()];
    args.extend(state.switch_args());
    args.extend(targets.iter().map(|target| target.to_string()));
    args
}

fn pull_from_push_remote(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let Some(push_remote) = &state.repository.head.push_remote else {
        log::debug!("No push remote configured");
        return Ok(Outcome::Cancelled);
    };
    let args = pull_args(state, &[&push_remote.remote, &push_remote.name]);
    session.run(&state.repository, args)
}

/// Bare pull; git resolves the upstream itself
fn pull_from_upstream(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let args = pull_args(state, &[]);
    session.run(&state.repository, args)
}

fn pull_from_elsewhere(session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
    let candidates = elsewhere_items(&state.repository);
    if candidates.is_empty() {
        log::info!("No remote-tracking branches to pull from");
    }
    let chosen = pick(&mut *session.prompter, &candidates, "Pull")?
        .ok_or(GitMenuError::PickerDismissed)?;

    let Some((remote, branch)) = remote_branch_segments(&chosen) else {
        log::debug!("'{chosen}' is not a remote/branch name");
        return Ok(Outcome::Cancelled);
    };
    let args = pull_args(state, &[remote, branch]);
    session.run(&state.repository, args)
}
