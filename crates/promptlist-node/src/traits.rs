use serde::Serialize;
use thiserror::Error;

use promptlist_store::StoreError;

use crate::{NodeDescriptor, NodeOutput, NodeParams};

/// Errors that can occur while running a node
#[derive(Error, Debug)]
pub enum NodeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Unknown node class: {0}")]
    UnknownNode(String),

    #[error("Invalid node parameters: {0}")]
    InvalidParams(String),
}

/// Answer to the host asking whether a cached output is still valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    Changed,
    /// Part of the host protocol. The built-in nodes never report it.
    Unchanged,
}

/// A node the host can place in its graph
pub trait PromptNode: Send + Sync {
    /// Static description of the node's inputs and outputs
    fn descriptor(&self) -> Result<NodeDescriptor, NodeError>;

    /// Run the node with the parameters supplied by the host
    fn process(&self, params: &NodeParams) -> Result<NodeOutput, NodeError>;

    /// Prompt files can change outside the graph, so outputs are never
    /// reused.
    fn is_changed(&self, _params: &NodeParams) -> ChangeStatus {
        ChangeStatus::Changed
    }
}
