use serde::Serialize;
use serde_json::{Map, Value};

use crate::NodeError;

/// Flat named parameters passed by the host for one invocation.
///
/// Missing or `null` text values read as empty strings and missing booleans
/// fall back to the declared default.
#[derive(Debug, Clone, Default)]
pub struct NodeParams {
    values: Map<String, Value>,
}

impl NodeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build params from a JSON object.
    pub fn from_json(value: Value) -> Result<Self, NodeError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(NodeError::InvalidParams(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Text value of `name`, empty when missing.
    pub fn text(&self, name: &str) -> Result<String, NodeError> {
        self.text_or(name, "")
    }

    /// Text value of `name`, `default` when missing.
    pub fn text_or(&self, name: &str, default: &str) -> Result<String, NodeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(NodeError::InvalidParams(format!(
                "'{}' must be a string, got {}",
                name, other
            ))),
        }
    }

    /// Boolean value of `name`, `default` when missing.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, NodeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(NodeError::InvalidParams(format!(
                "'{}' must be a boolean, got {}",
                name, other
            ))),
        }
    }
}

/// Values a node hands back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeOutput {
    pub positive: String,
    pub negative: String,
    /// Whole list as JSON, produced by the multi-list node only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_list: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_requires_object() {
        assert!(NodeParams::from_json(json!({"Prompt Name": "A"})).is_ok());
        assert!(matches!(
            NodeParams::from_json(json!(["A"])),
            Err(NodeError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_text_defaults() {
        let params = NodeParams::new()
            .with("Prompt Name", "A")
            .with("Negative Prompt", Value::Null);

        assert_eq!(params.text("Prompt Name").unwrap(), "A");
        assert_eq!(params.text("Negative Prompt").unwrap(), "");
        assert_eq!(params.text("Positive Prompt").unwrap(), "");
        assert_eq!(params.text_or("List File", "New List").unwrap(), "New List");
    }

    #[test]
    fn test_flag_defaults() {
        let params = NodeParams::new().with("Overwrite", true);

        assert!(params.flag("Overwrite", false).unwrap());
        assert!(!params.flag("Console log", false).unwrap());
        assert!(params.flag("Console log", true).unwrap());
    }

    #[test]
    fn test_wrong_types_rejected() {
        let params = NodeParams::new()
            .with("Overwrite", "yes")
            .with("Prompt Name", 3);

        assert!(matches!(
            params.flag("Overwrite", false),
            Err(NodeError::InvalidParams(_))
        ));
        assert!(matches!(
            params.text("Prompt Name"),
            Err(NodeError::InvalidParams(_))
        ));
    }
}
