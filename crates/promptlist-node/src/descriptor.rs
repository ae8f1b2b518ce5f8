use serde::Serialize;

/// Kind of value an input widget produces, with its default
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputKind {
    String { default: String },
    MultilineString { default: String },
    Boolean { default: bool },
    Choice { options: Vec<String>, default: String },
}

/// A declared input of a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: InputKind,
}

impl InputField {
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: InputKind::String {
                default: String::new(),
            },
        }
    }

    pub fn multiline(name: &'static str) -> Self {
        Self {
            name,
            kind: InputKind::MultilineString {
                default: String::new(),
            },
        }
    }

    pub fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: InputKind::Boolean { default },
        }
    }

    pub fn choice(name: &'static str, options: Vec<String>) -> Self {
        let default = options.first().cloned().unwrap_or_default();
        Self {
            name,
            kind: InputKind::Choice { options, default },
        }
    }
}

/// What the host needs to register and draw a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDescriptor {
    pub class_name: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub inputs: Vec<InputField>,
    pub outputs: Vec<&'static str>,
}

impl NodeDescriptor {
    pub fn input(&self, name: &str) -> Option<&InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }
}
