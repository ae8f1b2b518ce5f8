//! # promptlist-node
//!
//! Host-facing side of promptlist: the nodes a node-graph GUI places in its
//! graph and the table it looks them up in.
//!
//! ## Key Types
//!
//! - [`PromptNode`] - A node the host can run
//! - [`NodeDescriptor`] - Declared inputs and outputs of a node
//! - [`NodeParams`] - Flat named parameters for one invocation
//! - [`NodeRegistry`] - Class name to node table ([`registry`] is the
//!   process-wide one)
//!
//! ## Nodes
//!
//! - `ComfyUI_Prompt_JSON` ("Prompt JSON") - upserts into `list.json`
//! - `ComfyUI_Prompt_List_JSON` ("Prompt List JSON") - works on any list
//!   file, can create lists and draw random prompts

mod descriptor;
pub mod inputs;
mod params;
mod prompt_json;
mod prompt_list;
mod registry;
mod traits;

pub use descriptor::{InputField, InputKind, NodeDescriptor};
pub use params::{NodeOutput, NodeParams};
pub use prompt_json::{PromptJsonNode, PROMPT_JSON_CLASS, PROMPT_JSON_DISPLAY};
pub use prompt_list::{PromptListNode, PROMPT_LIST_CLASS, PROMPT_LIST_DISPLAY};
pub use registry::{registry, NodeFactory, NodeRegistration, NodeRegistry, NODE_REGISTRY};
pub use traits::{ChangeStatus, NodeError, PromptNode};
