//! Terminal interaction behind a small trait.
//!
//! The menu engine and the picker only ever ask two questions: "which of these
//! rows?" and "what text?". [`Prompter`] is that seam; [`TerminalPrompter`]
//! answers it with `dialoguer` widgets styled through `console`.

use crate::core::error::{GitMenuError, Result};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};
use std::io::IsTerminal;

pub trait Prompter {
    /// Let the user choose one row. `None` means the prompt was dismissed.
    fn select(&mut self, prompt: &str, rows: &[String]) -> Result<Option<usize>>;

    /// Ask for free text. An empty answer is reported as `None`.
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Returns the theme used by every git-menu prompt.
///
/// - Cyan bold prompt text
/// - Green `❯` prefix and text on the active row
pub fn menu_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: Style::new().cyan().bold(),
        active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
        active_item_style: Style::new().green(),
        ..ColorfulTheme::default()
    }
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Fails with [`GitMenuError::NotInteractive`] when stdin is not a terminal
    pub fn new() -> Result<Self> {
        if !std::io::stdin().is_terminal() {
            return Err(GitMenuError::NotInteractive);
        }
        Ok(Self {
            theme: menu_theme(),
        })
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, rows: &[String]) -> Result<Option<usize>> {
        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(rows)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let trimmed = answer.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}
