use super::serde_support::null_as_default;
use super::Rule;
use crate::shared::error::PolicyError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Serialization formats accepted for policy documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Json,
    Toml,
    Yaml,
}

impl PolicyFormat {
    /// Picks the format from the file extension; anything unrecognised is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => PolicyFormat::Toml,
            Some("yml") | Some("yaml") => PolicyFormat::Yaml,
            _ => PolicyFormat::Json,
        }
    }
}

/// Data-level policy definition as written by users
///
/// A document never evaluates anything itself; the rule registry resolves
/// it into a [`Policy`] of live rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl PolicyDocument {
    /// Deserializes a document without resolving any rules
    pub fn parse(content: &str, format: PolicyFormat) -> Result<Self, PolicyError> {
        let parsed: Result<Self, String> = match format {
            PolicyFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            PolicyFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            PolicyFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|details| PolicyError::PolicyParseError { details })
    }
}

/// One rule entry of a policy document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub params: Map<String, Value>,
}

/// A named, ordered collection of live rules
#[derive(Debug, Default)]
pub struct Policy {
    pub name: String,
    pub description: Option<String>,
    pub rules: Vec<Box<dyn Rule>>,
}

impl Policy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "name": "baseline",
            "rules": [
                {"type": "require-all-models-versioned"},
                {"type": "deny-tool", "severity": "critical", "params": {"tool_name": "exec_sql"}}
            ]
        }"#;

        let document: PolicyDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.name, "baseline");
        assert!(document.description.is_none());
        assert_eq!(document.rules.len(), 2);
        assert!(document.rules[0].severity.is_none());
        assert!(document.rules[0].params.is_empty());
        assert_eq!(document.rules[1].severity.as_deref(), Some("critical"));
        assert_eq!(document.rules[1].params["tool_name"], "exec_sql");
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let json = r#"{"name": "p", "rules": [{"type": "a"}, {"type": "b"}, {"type": "c"}]}"#;
        let document: PolicyDocument = serde_json::from_str(json).unwrap();
        let types: Vec<&str> = document.rules.iter().map(|r| r.rule_type.as_str()).collect();
        assert_eq!(types, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_name_is_a_parse_error() {
        let result = PolicyDocument::parse(r#"{"rules": []}"#, PolicyFormat::Json);
        assert!(matches!(result, Err(PolicyError::PolicyParseError { .. })));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(PolicyFormat::from_path(Path::new("p.json")), PolicyFormat::Json);
        assert_eq!(PolicyFormat::from_path(Path::new("p.TOML")), PolicyFormat::Toml);
        assert_eq!(PolicyFormat::from_path(Path::new("p.yml")), PolicyFormat::Yaml);
        assert_eq!(PolicyFormat::from_path(Path::new("p.yaml")), PolicyFormat::Yaml);
        assert_eq!(PolicyFormat::from_path(Path::new("policy")), PolicyFormat::Json);
    }

    #[test]
    fn test_parse_toml_document() {
        let toml = r#"
name = "toml-policy"
description = "written in TOML"

[[rules]]
type = "max-models"
severity = "medium"
params = { max = 3 }

[[rules]]
type = "allowed-providers"
params = { providers = ["openai"] }
"#;
        let document = PolicyDocument::parse(toml, PolicyFormat::Toml).unwrap();
        assert_eq!(document.name, "toml-policy");
        assert_eq!(document.description.as_deref(), Some("written in TOML"));
        assert_eq!(document.rules[0].params["max"], 3);
        assert_eq!(document.rules[1].params["providers"][0], "openai");
    }

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r#"
name: yaml-policy
rules:
  - type: deny-tool
    severity: critical
    params:
      tool_name: exec_sql
"#;
        let document = PolicyDocument::parse(yaml, PolicyFormat::Yaml).unwrap();
        assert_eq!(document.rules[0].rule_type, "deny-tool");
        assert_eq!(document.rules[0].params["tool_name"], "exec_sql");
    }
}
