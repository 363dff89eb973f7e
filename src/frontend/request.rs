//! Collaborator payload
//!
//! The request handed to the external parse-tree, semantic-analysis and
//! code-generation flows. Building it never touches the network.

use crate::frontend::core::lexer::Language;
use crate::util::diagnostic::Result;
use serde::{Deserialize, Serialize};

/// Source code plus the language it is written in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRequest {
    pub code: String,
    pub language: Language,
}

impl FlowRequest {
    pub fn new(
        code: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            code: code.into(),
            language,
        }
    }

    /// Pretty-printed JSON payload
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serialised_lowercase() {
        let request = FlowRequest::new("int x;", Language::Cpp);
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(value["language"], "cpp");
        assert_eq!(value["code"], "int x;");
    }

    #[test]
    fn test_roundtrip_from_json() {
        let request: FlowRequest =
            serde_json::from_str(r#"{"code":"class A {}","language":"java"}"#).unwrap();
        assert_eq!(request, FlowRequest::new("class A {}", Language::Java));
    }
}
