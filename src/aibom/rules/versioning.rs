use super::RuleParams;
use crate::aibom::domain::{Aibom, Rule, Severity, Violation};
use crate::shared::error::ParamError;

/// Requires models whose name contains `model_name` to carry a pinned version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireModelVersion {
    pub model_name: String,
    pub severity: Severity,
}

impl RequireModelVersion {
    pub const ID: &'static str = "AIBOM-002";
    pub const TYPE_NAME: &'static str = "require-model-version";

    pub fn new(model_name: impl Into<String>, severity: Severity) -> Self {
        Self {
            model_name: model_name.into(),
            severity,
        }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(params.required_str("model_name")?, severity))
    }
}

impl Rule for RequireModelVersion {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!("Model must have pinned version: {}", self.model_name)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        bom.models()
            .filter(|c| c.name.contains(&self.model_name) && !c.is_versioned())
            .map(|c| {
                self.violation(format!("model '{}' has no pinned version", c.name))
                    .with_component(&c.name)
            })
            .collect()
    }
}

/// Requires every model in the BOM to carry a pinned version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireAllModelsVersioned {
    pub severity: Severity,
}

impl RequireAllModelsVersioned {
    pub const ID: &'static str = "AIBOM-007";
    pub const TYPE_NAME: &'static str = "require-all-models-versioned";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for RequireAllModelsVersioned {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        "All models must have pinned versions".to_string()
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        bom.models()
            .filter(|c| !c.is_versioned())
            .map(|c| {
                self.violation(format!("model '{}' has no pinned version", c.name))
                    .with_component(&c.name)
            })
            .collect()
    }
}
