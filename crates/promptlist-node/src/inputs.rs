//! Input and output names shared with the host.

pub const PROMPT_NAME: &str = "Prompt Name";
pub const POSITIVE_PROMPT: &str = "Positive Prompt";
pub const NEGATIVE_PROMPT: &str = "Negative Prompt";
pub const OVERWRITE: &str = "Overwrite";
pub const CONSOLE_LOG: &str = "Console log";
pub const LIST_FILE: &str = "List File";
pub const NEW_LIST_NAME: &str = "New List Name";
pub const RANDOM: &str = "Random";

pub const OUTPUT_POSITIVE: &str = "positive";
pub const OUTPUT_NEGATIVE: &str = "negative";
pub const OUTPUT_PROMPT_LIST: &str = "prompt_list";

pub const CATEGORY: &str = "prompt";
