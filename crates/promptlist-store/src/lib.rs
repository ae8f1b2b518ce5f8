//! # promptlist-store
//!
//! Storage for named prompt pairs kept in JSON list files.
//!
//! Every list file lives in `<base_path>/Prompt/` and holds an object of
//! objects:
//!
//! ```json
//! {
//!     "portrait": {
//!         "positive": "a portrait, soft light",
//!         "negative": "blurry"
//!     }
//! }
//! ```
//!
//! ## Key Types
//!
//! - [`PromptStore`] - File access for one storage directory
//! - [`PromptList`] - Ordered mapping of prompt name to [`PromptEntry`]
//! - [`StoreError`] - Validation, parse, empty-list and I/O failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use promptlist_store::{upsert, PromptStore};
//!
//! let store = PromptStore::open("/data/comfy")?;
//! let mut list = store.load("list.json")?;
//! let entry = upsert(&mut list, "portrait", "a portrait", "", false)?;
//! store.save("list.json", &list)?;
//! ```
//!
//! Each call is load, mutate, save. Nothing is cached between calls and no
//! file locking is done, so two processes writing the same list race.

mod error;
mod list;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use list::{pick_random, pick_random_with, prompt_names, to_json, upsert};
pub use store::PromptStore;
pub use types::{
    PickedPrompt, PromptEntry, PromptList, DEFAULT_LIST_FILE, LIST_FILE_EXTENSION,
    NEW_LIST_SENTINEL, PROMPT_DIR_NAME,
};
