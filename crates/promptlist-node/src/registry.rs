use lazy_static::lazy_static;
use promptlist_store::PromptStore;

use crate::prompt_json::{PromptJsonNode, PROMPT_JSON_CLASS, PROMPT_JSON_DISPLAY};
use crate::prompt_list::{PromptListNode, PROMPT_LIST_CLASS, PROMPT_LIST_DISPLAY};
use crate::{NodeError, PromptNode};

/// Builds a node bound to a store
pub type NodeFactory = fn(PromptStore) -> Box<dyn PromptNode>;

/// One registered node class
#[derive(Clone)]
pub struct NodeRegistration {
    pub class_name: &'static str,
    pub display_name: &'static str,
    factory: NodeFactory,
}

impl NodeRegistration {
    pub fn create(&self, store: PromptStore) -> Box<dyn PromptNode> {
        (self.factory)(store)
    }
}

impl std::fmt::Debug for NodeRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistration")
            .field("class_name", &self.class_name)
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Class name to node table, in registration order
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<NodeRegistration>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every node this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(PROMPT_JSON_CLASS, PROMPT_JSON_DISPLAY, PromptJsonNode::boxed);
        registry.register(PROMPT_LIST_CLASS, PROMPT_LIST_DISPLAY, PromptListNode::boxed);
        registry
    }

    /// Register a node class. Registering a class name again replaces it.
    pub fn register(
        &mut self,
        class_name: &'static str,
        display_name: &'static str,
        factory: NodeFactory,
    ) {
        let registration = NodeRegistration {
            class_name,
            display_name,
            factory,
        };
        match self.nodes.iter_mut().find(|n| n.class_name == class_name) {
            Some(existing) => *existing = registration,
            None => self.nodes.push(registration),
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&NodeRegistration> {
        self.nodes.iter().find(|n| n.class_name == class_name)
    }

    pub fn display_name(&self, class_name: &str) -> Option<&'static str> {
        self.get(class_name).map(|n| n.display_name)
    }

    /// Instantiate a registered node against `store`.
    pub fn create(
        &self,
        class_name: &str,
        store: PromptStore,
    ) -> Result<Box<dyn PromptNode>, NodeError> {
        self.get(class_name)
            .map(|n| n.create(store))
            .ok_or_else(|| NodeError::UnknownNode(class_name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeRegistration> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

lazy_static! {
    /// Process-wide node table, built on first use.
    pub static ref NODE_REGISTRY: NodeRegistry = {
        let registry = NodeRegistry::builtin();
        tracing::info!(nodes = registry.len(), "Prompt nodes initialized");
        registry
    };
}

/// The process-wide node table.
pub fn registry() -> &'static NodeRegistry {
    &NODE_REGISTRY
}
