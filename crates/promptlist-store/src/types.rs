use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Subdirectory of the base path holding every list file.
pub const PROMPT_DIR_NAME: &str = "Prompt";

/// List file used by the single-list node.
pub const DEFAULT_LIST_FILE: &str = "list.json";

/// Selector value asking for a new list file instead of an existing one.
pub const NEW_LIST_SENTINEL: &str = "New List";

pub const LIST_FILE_EXTENSION: &str = "json";

/// A positive/negative prompt pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEntry {
    pub positive: String,
    #[serde(default)]
    pub negative: String,
}

impl PromptEntry {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }
}

/// Prompt name to entry, kept in insertion order.
pub type PromptList = IndexMap<String, PromptEntry>;

/// An entry chosen by a random pick, along with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickedPrompt {
    pub name: String,
    pub positive: String,
    pub negative: String,
}
