use super::RuleParams;
use crate::aibom::domain::{Aibom, Rule, Severity, Violation};
use crate::shared::error::ParamError;

/// Caps the number of model components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxModels {
    pub max: usize,
    pub severity: Severity,
}

impl MaxModels {
    pub const ID: &'static str = "AIBOM-005";
    pub const TYPE_NAME: &'static str = "max-models";

    pub fn new(max: usize, severity: Severity) -> Self {
        Self { max, severity }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(params.count("max")?, severity))
    }
}

impl Rule for MaxModels {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!("Max {} models allowed", self.max)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        let count = bom.model_count();
        if count > self.max {
            vec![self.violation(format!(
                "{} models found, max {} allowed",
                count, self.max
            ))]
        } else {
            Vec::new()
        }
    }
}

/// Caps the number of tool components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxTools {
    pub max: usize,
    pub severity: Severity,
}

impl MaxTools {
    pub const ID: &'static str = "AIBOM-006";
    pub const TYPE_NAME: &'static str = "max-tools";

    pub fn new(max: usize, severity: Severity) -> Self {
        Self { max, severity }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(params.count("max")?, severity))
    }
}

impl Rule for MaxTools {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!("Max {} tools allowed", self.max)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        let count = bom.tool_count();
        if count > self.max {
            vec![self.violation(format!(
                "{} tools found, max {} allowed",
                count, self.max
            ))]
        } else {
            Vec::new()
        }
    }
}
