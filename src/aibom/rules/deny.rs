use super::RuleParams;
use crate::aibom::domain::{Aibom, Component, Rule, Severity, Violation};
use crate::shared::error::ParamError;

/// Name match shared by the deny rules: exact equality or substring
/// containment, so suffixed variants ("gpt-4-turbo") are caught too.
fn name_matches(component: &Component, target: &str) -> bool {
    component.name == target || component.name.contains(target)
}

/// Denies any model whose name equals or contains `model_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyModel {
    pub model_name: String,
    pub reason: String,
    pub severity: Severity,
}

impl DenyModel {
    pub const ID: &'static str = "AIBOM-001";
    pub const TYPE_NAME: &'static str = "deny-model";

    pub fn new(model_name: impl Into<String>, reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            model_name: model_name.into(),
            reason: reason.into(),
            severity,
        }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(
            params.required_str("model_name")?,
            params.optional_str("reason")?,
            severity,
        ))
    }
}

impl Rule for DenyModel {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!(
            "Deny model matching '{}' (exact name or substring)",
            self.model_name
        )
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        bom.models()
            .filter(|c| name_matches(c, &self.model_name))
            .map(|c| {
                self.violation(format!("model '{}' is denied: {}", c.name, self.reason))
                    .with_component(&c.name)
            })
            .collect()
    }
}

/// Denies any tool whose name equals or contains `tool_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyTool {
    pub tool_name: String,
    pub reason: String,
    pub severity: Severity,
}

impl DenyTool {
    pub const ID: &'static str = "AIBOM-004";
    pub const TYPE_NAME: &'static str = "deny-tool";

    pub fn new(tool_name: impl Into<String>, reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            tool_name: tool_name.into(),
            reason: reason.into(),
            severity,
        }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(
            params.required_str("tool_name")?,
            params.optional_str("reason")?,
            severity,
        ))
    }
}

impl Rule for DenyTool {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!(
            "Deny tool matching '{}' (exact name or substring)",
            self.tool_name
        )
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        bom.tools()
            .filter(|c| name_matches(c, &self.tool_name))
            .map(|c| {
                self.violation(format!("tool '{}' is denied: {}", c.name, self.reason))
                    .with_component(&c.name)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aibom::rules::test_support::sample_bom;

    #[test]
    fn test_deny_model_exact_match() {
        let rule = DenyModel::new("gpt-4", "not approved", Severity::High);
        let violations = rule.evaluate(&sample_bom());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].component.as_deref(), Some("gpt-4"));
        assert_eq!(violations[0].message, "model 'gpt-4' is denied: not approved");
        assert_eq!(violations[0].rule_id, "AIBOM-001");
    }

    #[test]
    fn test_deny_model_substring_catches_variants() {
        let bom = Aibom::new("CycloneDX-AI").with_component(Component::model("gpt-4-turbo"));
        let rule = DenyModel::new("gpt-4", "", Severity::High);
        assert_eq!(rule.evaluate(&bom).len(), 1);
    }

    #[test]
    fn test_deny_model_no_match() {
        let rule = DenyModel::new("llama-3", "test", Severity::High);
        assert!(rule.evaluate(&sample_bom()).is_empty());
    }

    #[test]
    fn test_deny_model_ignores_tools_with_matching_name() {
        let bom = Aibom::new("CycloneDX-AI").with_component(Component::tool("gpt-4-wrapper"));
        let rule = DenyModel::new("gpt-4", "", Severity::High);
        assert!(rule.evaluate(&bom).is_empty());
    }

    #[test]
    fn test_deny_model_description_mentions_substring_matching() {
        let rule = DenyModel::new("gpt-4", "", Severity::High);
        assert!(rule.description().contains("substring"));
    }

    #[test]
    fn test_deny_tool_critical() {
        let rule = DenyTool::new("exec_sql", "dangerous", Severity::Critical);
        let violations = rule.evaluate(&sample_bom());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Critical);
        assert_eq!(violations[0].message, "tool 'exec_sql' is denied: dangerous");
        assert_eq!(violations[0].rule_name, "deny-tool");
    }

    #[test]
    fn test_deny_tool_substring() {
        let rule = DenyTool::new("search", "", Severity::Low);
        let violations = rule.evaluate(&sample_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].component.as_deref(), Some("web_search"));
    }

    #[test]
    fn test_from_params_requires_name() {
        let err = DenyTool::from_params(Severity::High, &RuleParams::default()).unwrap_err();
        assert_eq!(
            err,
            ParamError::Missing {
                name: "tool_name".to_string()
            }
        );
    }
}
