use crate::aibom::domain::{Policy, PolicyDocument, PolicyFormat, Rule, Severity};
use crate::aibom::rules::{
    AllowedProviders, DenyExternalEndpoints, DenyModel, DenyTool, MaxModels, MaxTools,
    RequireAllModelsVersioned, RequireModelVersion, RuleParams,
};
use crate::shared::error::{ParamError, PolicyError};
use crate::shared::security;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Constructor for one rule type: validates parameters and returns a live rule
pub type RuleBuilder =
    Box<dyn Fn(Severity, &RuleParams) -> Result<Box<dyn Rule>, ParamError> + Send + Sync>;

/// Maps rule type names, as written in policy documents, to rule builders
///
/// The registry is an explicit value rather than a global so callers (and
/// tests) can extend or override rule types in isolation. Registration is
/// expected to finish before the first document is resolved.
#[derive(Default)]
pub struct RuleRegistry {
    builders: HashMap<String, RuleBuilder>,
}

impl RuleRegistry {
    /// Creates an empty registry with no rule types
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all eight built-in rule types registered
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();

        registry.register(DenyModel::TYPE_NAME, |severity, params| {
            Ok(Box::new(DenyModel::from_params(severity, params)?))
        });
        registry.register(RequireModelVersion::TYPE_NAME, |severity, params| {
            Ok(Box::new(RequireModelVersion::from_params(severity, params)?))
        });
        registry.register(AllowedProviders::TYPE_NAME, |severity, params| {
            Ok(Box::new(AllowedProviders::from_params(severity, params)?))
        });
        registry.register(DenyTool::TYPE_NAME, |severity, params| {
            Ok(Box::new(DenyTool::from_params(severity, params)?))
        });
        registry.register(MaxModels::TYPE_NAME, |severity, params| {
            Ok(Box::new(MaxModels::from_params(severity, params)?))
        });
        registry.register(MaxTools::TYPE_NAME, |severity, params| {
            Ok(Box::new(MaxTools::from_params(severity, params)?))
        });
        registry.register(RequireAllModelsVersioned::TYPE_NAME, |severity, _| {
            Ok(Box::new(RequireAllModelsVersioned::new(severity)))
        });
        registry.register(DenyExternalEndpoints::TYPE_NAME, |severity, params| {
            Ok(Box::new(DenyExternalEndpoints::from_params(
                severity, params,
            )?))
        });

        registry
    }

    /// Inserts or replaces the builder for `type_name`; the last registration wins
    pub fn register<F>(&mut self, type_name: impl Into<String>, builder: F)
    where
        F: Fn(Severity, &RuleParams) -> Result<Box<dyn Rule>, ParamError> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        if self
            .builders
            .insert(type_name.clone(), Box::new(builder))
            .is_some()
        {
            tracing::debug!(rule_type = %type_name, "replaced rule builder");
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.builders.contains_key(type_name)
    }

    /// Registered rule type names in sorted order
    pub fn rule_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves every rule definition of a document, in order
    ///
    /// Fails on the first unknown type, invalid severity or invalid
    /// parameter set; no partial policy is ever returned.
    pub fn resolve(&self, document: PolicyDocument) -> Result<Policy, PolicyError> {
        let mut policy = Policy::new(document.name);
        policy.description = document.description;

        for (index, definition) in document.rules.into_iter().enumerate() {
            let severity = Severity::from_optional(definition.severity.as_deref())?;

            let builder = self.builders.get(&definition.rule_type).ok_or_else(|| {
                PolicyError::UnknownRuleType {
                    rule_type: definition.rule_type.clone(),
                    known: self.rule_types().into_iter().map(String::from).collect(),
                }
            })?;

            let params = RuleParams::new(definition.params);
            let rule = builder(severity, &params).map_err(|source| PolicyError::InvalidRule {
                rule_type: definition.rule_type.clone(),
                index,
                source,
            })?;

            tracing::debug!(
                policy = %policy.name,
                rule_type = %definition.rule_type,
                %severity,
                "resolved rule"
            );
            policy.push(rule);
        }

        tracing::info!(
            policy = %policy.name,
            rules = policy.rule_count(),
            "policy resolved"
        );
        Ok(policy)
    }

    /// Deserializes a JSON policy document and resolves it
    pub fn parse_policy_json(&self, data: &[u8]) -> Result<Policy, PolicyError> {
        let document: PolicyDocument =
            serde_json::from_slice(data).map_err(|e| PolicyError::PolicyParseError {
                details: e.to_string(),
            })?;
        self.resolve(document)
    }

    /// Deserializes a TOML policy document and resolves it
    pub fn parse_policy_toml(&self, content: &str) -> Result<Policy, PolicyError> {
        self.resolve(PolicyDocument::parse(content, PolicyFormat::Toml)?)
    }

    /// Deserializes a YAML policy document and resolves it
    pub fn parse_policy_yaml(&self, content: &str) -> Result<Policy, PolicyError> {
        self.resolve(PolicyDocument::parse(content, PolicyFormat::Yaml)?)
    }

    /// Reads a policy file and resolves it; the format follows the extension
    pub fn load_policy_file(&self, path: &Path) -> Result<Policy, PolicyError> {
        let content = security::read_document(path, "policy file").map_err(|e| {
            PolicyError::PolicyReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        match PolicyFormat::from_path(path) {
            PolicyFormat::Json => self.parse_policy_json(content.as_bytes()),
            PolicyFormat::Toml => self.parse_policy_toml(&content),
            PolicyFormat::Yaml => self.parse_policy_yaml(&content),
        }
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rule_types", &self.rule_types())
            .finish()
    }
}
