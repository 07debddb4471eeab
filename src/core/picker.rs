//! Single-choice picker over labelled candidates.
//!
//! A dismissed picker is an ordinary outcome, reported as `Ok(None)`. Each
//! caller decides what dismissal means for its command.

use crate::core::{error::Result, prompt::Prompter};

/// Row shown for the free-text fallback of [`pick_or_enter`]
pub const ENTER_VALUE_ROW: &str = "(enter a value)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem<T> {
    pub label: String,
    pub description: Option<String>,
    pub payload: T,
}

impl<T> PickItem<T> {
    pub fn new(label: impl Into<String>, payload: T) -> Self {
        Self {
            label: label.into(),
            description: None,
            payload,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }

    fn row(&self) -> String {
        match &self.description {
            Some(description) => format!("{}  {}", self.label, description),
            None => self.label.clone(),
        }
    }
}

/// Present `items` and return the chosen payload
pub fn pick<T: Clone>(
    prompter: &mut dyn Prompter,
    items: &[PickItem<T>],
    prompt: &str,
) -> Result<Option<T>> {
    if items.is_empty() {
        log::debug!("Nothing to pick for '{prompt}'");
        return Ok(None);
    }

    let rows: Vec<String> = items.iter().map(PickItem::row).collect();
    let choice = prompter.select(prompt, &rows)?;

    Ok(choice
        .and_then(|index| items.get(index))
        .map(|item| item.payload.clone()))
}

/// Like [`pick`] over string payloads, with an extra row for typing a value
/// that is not in the list.
pub fn pick_or_enter(
    prompter: &mut dyn Prompter,
    items: &[PickItem<String>],
    prompt: &str,
) -> Result<Option<String>> {
    let mut rows: Vec<String> = items.iter().map(PickItem::row).collect();
    rows.push(ENTER_VALUE_ROW.to_string());

    match prompter.select(prompt, &rows)? {
        Some(index) if index < items.len() => Ok(Some(items[index].payload.clone())),
        Some(_) => prompter.input(prompt),
        None => Ok(None),
    }
}
