//! Scripted collaborators for driving menus in tests.
//!
//! [`ScriptedPrompter`] answers prompts from a fixed list and panics on an
//! answer that does not fit the prompt. [`RecordingRunner`] records argv
//! instead of spawning git. Shared by the unit tests and the integration
//! tests under `tests/`.

use crate::core::{
    error::{GitMenuError, Result},
    prompt::Prompter,
    runner::{CommandRunner, RunResult},
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the first row starting with this text
    Choose(String),
    /// Type this text into an input prompt
    Text(String),
    Dismiss,
}

impl Answer {
    pub fn choose(prefix: &str) -> Self {
        Self::Choose(prefix.to_string())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Answers prompts from a fixed script and records what was shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    shown: Vec<(String, Vec<String>)>,
    inputs: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn shown_rows(&self, index: usize) -> &[String] {
        &self.shown[index].1
    }

    pub fn shown_prompt(&self, index: usize) -> &str {
        &self.shown[index].0
    }

    pub fn prompts_shown(&self) -> usize {
        self.shown.len()
    }

    pub fn input_prompts(&self) -> &[String] {
        &self.inputs
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, rows: &[String]) -> Result<Option<usize>> {
        self.shown.push((prompt.to_string(), rows.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Choose(prefix)) => {
                let index = rows
                    .iter()
                    .position(|row| row.starts_with(&prefix))
                    .unwrap_or_else(|| panic!("no row starting with {prefix:?} in {rows:?}"));
                Ok(Some(index))
            }
            Some(Answer::Dismiss) => Ok(None),
            other => panic!("unexpected select '{prompt}', scripted answer was {other:?}"),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.inputs.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) if text.is_empty() => Ok(None),
            Some(Answer::Text(text)) => Ok(Some(text)),
            Some(Answer::Dismiss) => Ok(None),
            other => panic!("unexpected input '{prompt}', scripted answer was {other:?}"),
        }
    }
}

/// Records every argv instead of spawning a process
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Vec<String>>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call whose first argument is `subcommand`
    pub fn failing_on(subcommand: &str) -> Self {
        Self {
            fail_on: Some(subcommand.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, _workdir: &Path, args: &[String]) -> Result<RunResult> {
        self.calls.borrow_mut().push(args.to_vec());
        if let (Some(fail_on), Some(first)) = (&self.fail_on, args.first()) {
            if fail_on == first {
                return Err(GitMenuError::command_failed(
                    format!("git {}", args.join(" ")),
                    "error: could not lock config file",
                ));
            }
        }
        Ok(RunResult {
            args: args.to_vec(),
            ..RunResult::default()
        })
    }
}

/// Build an owned argv from string literals
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
