use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::list::to_json;
use crate::types::{
    PromptList, DEFAULT_LIST_FILE, LIST_FILE_EXTENSION, NEW_LIST_SENTINEL, PROMPT_DIR_NAME,
};

/// Provides access to the prompt list files under one base path.
#[derive(Debug, Clone)]
pub struct PromptStore {
    prompt_dir: PathBuf,
}

impl PromptStore {
    /// Open the store rooted at `<base_path>/Prompt`, creating the directory
    /// if it does not exist yet.
    pub fn open(base_path: impl AsRef<Path>) -> Result<Self> {
        let prompt_dir = base_path.as_ref().join(PROMPT_DIR_NAME);
        let store = Self { prompt_dir };
        store.ensure_dir()?;
        Ok(store)
    }

    /// Return the directory holding the list files.
    pub fn prompt_dir(&self) -> &Path {
        &self.prompt_dir
    }

    /// Path of a list file inside the store.
    pub fn list_path(&self, list_name: &str) -> PathBuf {
        self.prompt_dir.join(list_name)
    }

    /// Make sure `list.json` exists, writing `{}` if it has to be created.
    pub fn ensure_default_list(&self) -> Result<PathBuf> {
        self.ensure_list(DEFAULT_LIST_FILE)
    }

    /// Make sure the named list file exists, writing `{}` if it has to be
    /// created.
    pub fn ensure_list(&self, list_name: &str) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.checked_path(list_name)?;
        if !path.exists() {
            self.save(list_name, &PromptList::new())?;
            tracing::info!(path = %path.display(), "Created prompt list");
        }
        Ok(path)
    }

    /// List file names in the store, preceded by the "New List" sentinel.
    ///
    /// Only files with a `.json` extension are included, sorted by name.
    pub fn list_available_files(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.prompt_dir)
            .map_err(|e| StoreError::io(&self.prompt_dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.prompt_dir, e))?;
            let path = entry.path();

            if !path.is_file()
                || path.extension().and_then(|s| s.to_str()) != Some(LIST_FILE_EXTENSION)
            {
                continue;
            }

            match path.file_name().and_then(|s| s.to_str()) {
                Some(name) => files.push(name.to_string()),
                None => tracing::warn!("Skipping list file with non UTF-8 name: {:?}", path),
            }
        }
        files.sort();

        let mut available = Vec::with_capacity(files.len() + 1);
        available.push(NEW_LIST_SENTINEL.to_string());
        available.extend(files);
        Ok(available)
    }

    /// Turn a list selector into a list file name.
    ///
    /// The "New List" sentinel takes its file name from `new_name`. Any other
    /// selector names the file directly. Both get `.json` appended when
    /// missing and must be a plain file name inside the store. The resolved
    /// file is created empty if it does not exist.
    pub fn resolve_list(&self, selector: &str, new_name: &str) -> Result<String> {
        let selector = selector.trim();
        let name = if selector == NEW_LIST_SENTINEL {
            new_name.trim()
        } else {
            selector
        };
        if name.is_empty() {
            return Err(StoreError::Validation("list name required".to_string()));
        }

        let list_name = with_list_extension(name);
        self.ensure_list(&list_name)?;
        Ok(list_name)
    }

    /// Load a list file. A missing file loads as an empty list.
    pub fn load(&self, list_name: &str) -> Result<PromptList> {
        let path = self.checked_path(list_name)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "List file missing, starting empty");
                return Ok(PromptList::new());
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        // A `null` document counts as an empty list
        let list: Option<PromptList> = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        let list = list.unwrap_or_default();
        tracing::debug!(path = %path.display(), prompts = list.len(), "Loaded prompt list");
        Ok(list)
    }

    /// Write the whole list back to its file, replacing previous contents.
    pub fn save(&self, list_name: &str, list: &PromptList) -> Result<()> {
        self.ensure_dir()?;
        let path = self.checked_path(list_name)?;
        let json = to_json(list)?;

        fs::write(&path, json).map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(path = %path.display(), prompts = list.len(), "Saved prompt list");
        Ok(())
    }

    /// Path of a list file, rejecting names that would leave the store.
    fn checked_path(&self, list_name: &str) -> Result<PathBuf> {
        let mut components = Path::new(list_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.list_path(list_name)),
            _ => Err(StoreError::Validation(format!(
                "invalid list name: {}",
                list_name
            ))),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.prompt_dir).map_err(|e| StoreError::io(&self.prompt_dir, e))
    }
}

fn with_list_extension(name: &str) -> String {
    let suffix = format!(".{}", LIST_FILE_EXTENSION);
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_list_extension() {
        assert_eq!(with_list_extension("portraits"), "portraits.json");
        assert_eq!(with_list_extension("portraits.json"), "portraits.json");
    }

    #[test]
    fn test_checked_path_accepts_plain_names_only() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();

        assert_eq!(
            store.checked_path("list.json").unwrap(),
            store.prompt_dir().join("list.json")
        );
        for bad in ["", "..", "../up.json", "sub/inner.json", "/abs.json", "./list.json"] {
            assert!(
                matches!(store.checked_path(bad), Err(StoreError::Validation(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_open_creates_prompt_dir() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("base");

        let store = PromptStore::open(&base).unwrap();

        assert!(store.prompt_dir().is_dir());
        assert_eq!(store.prompt_dir(), base.join("Prompt"));
    }

    #[test]
    fn test_ensure_default_list_writes_empty_object() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();

        let path = store.ensure_default_list().unwrap();

        assert_eq!(path, store.prompt_dir().join("list.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_ensure_default_list_keeps_existing() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();
        let path = store.list_path("list.json");
        fs::write(&path, r#"{"A": {"positive": "p", "negative": "n"}}"#).unwrap();

        store.ensure_default_list().unwrap();

        assert_eq!(store.load("list.json").unwrap().len(), 1);
    }

    #[test]
    fn test_load_null_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();
        fs::write(store.list_path("list.json"), "null").unwrap();

        assert!(store.load("list.json").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_negative_defaults_empty() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();
        fs::write(store.list_path("list.json"), r#"{"A": {"positive": "p"}}"#).unwrap();

        let list = store.load("list.json").unwrap();

        assert_eq!(list["A"].negative, "");
    }
}
