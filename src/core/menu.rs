//! Menu and switch engine.
//!
//! A menu is a title, a list of single-character actions and a list of
//! toggleable switches. The user flips any number of switches, then picks one
//! action; the action receives the repository and the final switch set.
//!
//! Actions are plain function pointers. An action that first needs a missing
//! setting (an upstream, a push remote) is a [`Action::ResolveThen`]: the
//! resolver runs, and only if it resolves does the direct handler run, with
//! the very same state.
//!
//! # Public API
//! - [`show_menu`]: Present a [`MenuDefinition`] and invoke the chosen action
//! - [`switches_to_args`]: Active switches as command-line flags
//! - [`Session`]: The prompter and process runner handed to every action

use crate::core::{
    error::Result,
    prompt::Prompter,
    runner::{CommandRunner, RunResult},
    state::RepoState,
};

/// A boolean option that maps to one command-line flag when active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub key: char,
    pub flag: String,
    pub description: String,
    pub active: bool,
}

impl Switch {
    pub fn new(key: char, flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key,
            flag: flag.into(),
            description: description.into(),
            active: false,
        }
    }

    /// Mark the switch as on before the menu is shown
    pub fn enabled(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn row(&self) -> String {
        let marker = if self.active { "[on]" } else { "[off]" };
        format!("-{} {}  {} {}", self.key, self.flag, self.description, marker)
    }
}

/// Map active switches to their long flags, keeping definition order
pub fn switches_to_args(switches: &[Switch]) -> Vec<String> {
    switches
        .iter()
        .filter(|switch| switch.active)
        .map(|switch| switch.flag.clone())
        .collect()
}

/// Interactive collaborators shared by every action of one command
pub struct Session<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub runner: &'a dyn CommandRunner,
}

impl<'a> Session<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, runner: &'a dyn CommandRunner) -> Self {
        Self { prompter, runner }
    }

    /// Run git once against the repository and wrap the result
    pub fn run(&self, repository: &RepoState, args: Vec<String>) -> Result<Outcome> {
        let result = self.runner.run(&repository.workdir, &args)?;
        Ok(Outcome::Ran(result))
    }
}

/// Repository plus the switch set chosen in the menu
#[derive(Debug, Clone)]
pub struct MenuState {
    pub repository: RepoState,
    pub switches: Vec<Switch>,
}

impl MenuState {
    pub fn new(repository: RepoState, switches: Vec<Switch>) -> Self {
        Self {
            repository,
            switches,
        }
    }

    pub fn switch_args(&self) -> Vec<String> {
        switches_to_args(&self.switches)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ran(RunResult),
    Cancelled,
}

impl Outcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result of filling in a missing setting before an action runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved,
    Abandoned,
}

pub type Handler = fn(&mut Session<'_>, &mut MenuState) -> Result<Outcome>;
pub type Resolver = fn(&mut Session<'_>, &mut MenuState) -> Result<Resolution>;

#[derive(Clone, Copy)]
pub enum Action {
    Run(Handler),
    ResolveThen { resolve: Resolver, then: Handler },
}

impl Action {
    pub fn invoke(self, session: &mut Session<'_>, state: &mut MenuState) -> Result<Outcome> {
        match self {
            Action::Run(handler) => handler(session, state),
            Action::ResolveThen { resolve, then } => match resolve(session, state)? {
                Resolution::Resolved => then(session, state),
                Resolution::Abandoned => Ok(Outcome::Cancelled),
            },
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Run(_) => f.write_str("Run"),
            Action::ResolveThen { .. } => f.write_str("ResolveThen"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: char,
    pub description: String,
    pub action: Action,
}

impl MenuItem {
    pub fn new(label: char, description: impl Into<String>, action: Action) -> Self {
        Self {
            label,
            description: description.into(),
            action,
        }
    }

    fn row(&self) -> String {
        format!("{}  {}", self.label, self.description)
    }
}

#[derive(Debug, Clone)]
pub struct MenuDefinition {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuDefinition {
    /// Labels must be unique within a menu
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        debug_assert!(
            items
                .iter()
                .enumerate()
                .all(|(i, item)| items[..i].iter().all(|other| other.label != item.label)),
            "duplicate menu label"
        );
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn labels(&self) -> Vec<char> {
        self.items.iter().map(|item| item.label).collect()
    }

    pub fn item(&self, label: char) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.label == label)
    }
}

fn render_rows(menu: &MenuDefinition, switches: &[Switch]) -> Vec<String> {
    switches
        .iter()
        .map(Switch::row)
        .chain(menu.items.iter().map(MenuItem::row))
        .collect()
}

/// Show the menu until an action is picked or the menu is dismissed.
///
/// Switch rows come first and toggle in place; the first action row ends the
/// loop and its result is returned as-is.
pub fn show_menu(
    session: &mut Session<'_>,
    menu: &MenuDefinition,
    mut state: MenuState,
) -> Result<Outcome> {
    loop {
        let rows = render_rows(menu, &state.switches);
        let Some(index) = session.prompter.select(&menu.title, &rows)? else {
            log::debug!("{} menu dismissed", menu.title);
            return Ok(Outcome::Cancelled);
        };

        if let Some(switch) = state.switches.get_mut(index) {
            switch.active = !switch.active;
            log::debug!("Switch {} is now {}", switch.flag, switch.active);
            continue;
        }

        let Some(item) = menu.items.get(index - state.switches.len()) else {
            return Ok(Outcome::Cancelled);
        };

        log::debug!(
            "{}: '{}' with {:?}",
            menu.title,
            item.label,
            state.switch_args()
        );
        return item.action.invoke(session, &mut state);
    }
}
