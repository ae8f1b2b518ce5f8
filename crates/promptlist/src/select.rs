//! Picking the list file a command works on.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use dialoguer::{FuzzySelect, Input};

use promptlist_store::{PromptStore, DEFAULT_LIST_FILE, NEW_LIST_SENTINEL};

/// Resolve the list a command should use.
///
/// An explicit selector goes through [`PromptStore::resolve_list`]. Without
/// one, an interactive terminal gets a picker whose first item is
/// "New List"; otherwise `list.json` is used.
pub fn choose_list(
    store: &PromptStore,
    selector: Option<&str>,
    new_list_name: Option<&str>,
) -> Result<String> {
    if let Some(selector) = selector {
        return store
            .resolve_list(selector, new_list_name.unwrap_or(""))
            .with_context(|| format!("Failed to open list '{}'", selector));
    }

    if !is_interactive() {
        store.ensure_default_list()?;
        return Ok(DEFAULT_LIST_FILE.to_string());
    }

    let files = store.list_available_files()?;
    let default = files
        .iter()
        .position(|f| f == DEFAULT_LIST_FILE)
        .unwrap_or(0);
    let selection = FuzzySelect::new()
        .with_prompt("Prompt list")
        .items(&files)
        .default(default)
        .interact()?;

    let selected = &files[selection];
    let new_name = if selected == NEW_LIST_SENTINEL {
        match new_list_name {
            Some(name) => name.to_string(),
            None => Input::<String>::new()
                .with_prompt("New list name")
                .interact_text()?,
        }
    } else {
        String::new()
    };

    Ok(store.resolve_list(selected, &new_name)?)
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}
