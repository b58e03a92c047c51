//! JSON reporter
//!
//! Outputs every parse result as pretty-printed JSON, keyed by source path.

use super::ParsedSource;
use anyhow::Result;

/// Render results as JSON
pub fn render(sources: &[ParsedSource]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sources)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_source;

    #[test]
    fn test_json_render_valid() {
        let json_str = render(&[test_source()]).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        let result = &parsed[0]["result"];
        assert_eq!(parsed[0]["path"], "DisputeGateway.java");
        assert_eq!(result["class_name"], "com.acme.DisputeGateway");
        assert_eq!(
            result["api_description"],
            "Provides methods to interact with Dispute objects"
        );
        assert_eq!(result["methods"].as_array().expect("methods array").len(), 3);
        assert_eq!(result["parameters"]["accept"]["id"], "The dispute id");
        assert!(result["error_message"].is_null());
    }

    #[test]
    fn test_json_preserves_declaration_order() {
        let json_str = render(&[test_source()]).expect("render JSON");
        let accept = json_str.find("\"accept\"").expect("accept");
        let add = json_str.find("\"addTextEvidence\"").expect("addTextEvidence");
        assert!(accept < add);
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(render(&[]).expect("render JSON"), "[]");
    }
}
