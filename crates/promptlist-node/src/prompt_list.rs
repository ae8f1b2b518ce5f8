use promptlist_logging::{ConsoleReporter, PromptReport};
use promptlist_store::{pick_random, to_json, upsert, PromptStore, NEW_LIST_SENTINEL};

use crate::inputs::*;
use crate::{InputField, NodeDescriptor, NodeError, NodeOutput, NodeParams, PromptNode};

pub const PROMPT_LIST_CLASS: &str = "ComfyUI_Prompt_List_JSON";
pub const PROMPT_LIST_DISPLAY: &str = "Prompt List JSON";

/// Multi-list node: picks a list file (or creates one through the
/// "New List" selector), then upserts into it or draws a random entry.
pub struct PromptListNode {
    store: PromptStore,
}

impl PromptListNode {
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    pub fn boxed(store: PromptStore) -> Box<dyn PromptNode> {
        Box::new(Self::new(store))
    }
}

impl PromptNode for PromptListNode {
    fn descriptor(&self) -> Result<NodeDescriptor, NodeError> {
        let files = self.store.list_available_files()?;

        Ok(NodeDescriptor {
            class_name: PROMPT_LIST_CLASS,
            display_name: PROMPT_LIST_DISPLAY,
            category: CATEGORY,
            inputs: vec![
                InputField::choice(LIST_FILE, files),
                InputField::string(NEW_LIST_NAME),
                InputField::string(PROMPT_NAME),
                InputField::multiline(POSITIVE_PROMPT),
                InputField::multiline(NEGATIVE_PROMPT),
                InputField::boolean(OVERWRITE, false),
                InputField::boolean(RANDOM, false),
                InputField::boolean(CONSOLE_LOG, false),
            ],
            outputs: vec![OUTPUT_POSITIVE, OUTPUT_NEGATIVE, OUTPUT_PROMPT_LIST],
        })
    }

    fn process(&self, params: &NodeParams) -> Result<NodeOutput, NodeError> {
        let selector = params.text_or(LIST_FILE, NEW_LIST_SENTINEL)?;
        let new_list_name = params.text(NEW_LIST_NAME)?;
        let random = params.flag(RANDOM, false)?;
        let console_log = params.flag(CONSOLE_LOG, false)?;

        let list_name = self.store.resolve_list(&selector, &new_list_name)?;
        let mut list = self.store.load(&list_name)?;

        let (name, positive, negative) = if random {
            let picked = pick_random(&list)?;
            tracing::info!(list = %list_name, name = %picked.name, "Picked random prompt");
            (picked.name, picked.positive, picked.negative)
        } else {
            let name = params.text(PROMPT_NAME)?;
            let entry = upsert(
                &mut list,
                &name,
                &params.text(POSITIVE_PROMPT)?,
                &params.text(NEGATIVE_PROMPT)?,
                params.flag(OVERWRITE, false)?,
            )?;
            (name.trim().to_string(), entry.positive, entry.negative)
        };

        if console_log {
            ConsoleReporter::new().report(&PromptReport {
                name: &name,
                source: &list_name,
                positive: &positive,
                negative: &negative,
            });
        }

        self.store.save(&list_name, &list)?;

        Ok(NodeOutput {
            positive,
            negative,
            prompt_list: Some(to_json(&list)?),
        })
    }
}
