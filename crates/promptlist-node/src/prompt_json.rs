use promptlist_logging::{ConsoleReporter, PromptReport};
use promptlist_store::{upsert, PromptStore, DEFAULT_LIST_FILE};

use crate::inputs::*;
use crate::{InputField, NodeDescriptor, NodeError, NodeOutput, NodeParams, PromptNode};

pub const PROMPT_JSON_CLASS: &str = "ComfyUI_Prompt_JSON";
pub const PROMPT_JSON_DISPLAY: &str = "Prompt JSON";

/// Single-list node: stores and recalls prompts in `list.json`.
pub struct PromptJsonNode {
    store: PromptStore,
}

impl PromptJsonNode {
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    pub fn boxed(store: PromptStore) -> Box<dyn PromptNode> {
        Box::new(Self::new(store))
    }
}

impl PromptNode for PromptJsonNode {
    fn descriptor(&self) -> Result<NodeDescriptor, NodeError> {
        Ok(NodeDescriptor {
            class_name: PROMPT_JSON_CLASS,
            display_name: PROMPT_JSON_DISPLAY,
            category: CATEGORY,
            inputs: vec![
                InputField::string(PROMPT_NAME),
                InputField::boolean(OVERWRITE, false),
                InputField::boolean(CONSOLE_LOG, false),
                InputField::multiline(POSITIVE_PROMPT),
                InputField::multiline(NEGATIVE_PROMPT),
            ],
            outputs: vec![OUTPUT_POSITIVE, OUTPUT_NEGATIVE],
        })
    }

    fn process(&self, params: &NodeParams) -> Result<NodeOutput, NodeError> {
        let name = params.text(PROMPT_NAME)?;
        let positive = params.text(POSITIVE_PROMPT)?;
        let negative = params.text(NEGATIVE_PROMPT)?;
        let overwrite = params.flag(OVERWRITE, false)?;
        let console_log = params.flag(CONSOLE_LOG, false)?;

        self.store.ensure_default_list()?;
        let mut list = self.store.load(DEFAULT_LIST_FILE)?;

        let entry = upsert(&mut list, &name, &positive, &negative, overwrite)?;

        if console_log {
            ConsoleReporter::new().report(&PromptReport {
                name: name.trim(),
                source: DEFAULT_LIST_FILE,
                positive: &entry.positive,
                negative: &entry.negative,
            });
        }

        self.store.save(DEFAULT_LIST_FILE, &list)?;

        Ok(NodeOutput {
            positive: entry.positive,
            negative: entry.negative,
            prompt_list: None,
        })
    }
}
