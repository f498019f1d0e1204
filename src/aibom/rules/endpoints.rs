use super::RuleParams;
use crate::aibom::domain::{Aibom, Rule, Severity, Violation};
use crate::shared::error::ParamError;
use std::collections::HashSet;

/// Allow-lists external service hosts; any service not listed is denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyExternalEndpoints {
    pub allowed_hosts: Vec<String>,
    pub severity: Severity,
}

impl DenyExternalEndpoints {
    pub const ID: &'static str = "AIBOM-008";
    pub const TYPE_NAME: &'static str = "deny-external-endpoints";

    pub fn new(allowed_hosts: Vec<String>, severity: Severity) -> Self {
        Self {
            allowed_hosts,
            severity,
        }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(params.string_list("allowed_hosts")?, severity))
    }
}

impl Rule for DenyExternalEndpoints {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        if self.allowed_hosts.is_empty() {
            "No external endpoints allowed".to_string()
        } else {
            format!(
                "Only allowed external endpoints: [{}]",
                self.allowed_hosts.join(", ")
            )
        }
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        let allowed: HashSet<String> = self
            .allowed_hosts
            .iter()
            .map(|h| h.to_lowercase())
            .collect();

        bom.services
            .iter()
            .filter(|s| !allowed.contains(&s.name.to_lowercase()))
            .map(|s| {
                self.violation(format!(
                    "external endpoint '{}' not in allowed list",
                    s.name
                ))
                .with_component(&s.name)
            })
            .collect()
    }
}
