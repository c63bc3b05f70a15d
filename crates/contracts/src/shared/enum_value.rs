use serde::{Deserialize, Serialize};

/// Server-side enum rendered as `{value, text}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl EnumValue {
    /// Display text, falling back to the raw value
    pub fn display(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.value)
    }
}
