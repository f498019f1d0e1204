use super::RuleParams;
use crate::aibom::domain::{Aibom, Rule, Severity, Violation};
use crate::shared::error::ParamError;
use std::collections::HashSet;

/// Restricts model providers to an allow-list (case-insensitive)
///
/// Models with no provider are exempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedProviders {
    pub providers: Vec<String>,
    pub severity: Severity,
}

impl AllowedProviders {
    pub const ID: &'static str = "AIBOM-003";
    pub const TYPE_NAME: &'static str = "allowed-providers";

    pub fn new(providers: Vec<String>, severity: Severity) -> Self {
        Self {
            providers,
            severity,
        }
    }

    pub fn from_params(severity: Severity, params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(params.string_list("providers")?, severity))
    }
}

impl Rule for AllowedProviders {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn description(&self) -> String {
        format!("Only providers: [{}]", self.providers.join(", "))
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation> {
        let allowed: HashSet<String> = self.providers.iter().map(|p| p.to_lowercase()).collect();

        bom.models()
            .filter(|c| !c.provider().is_empty())
            .filter(|c| !allowed.contains(&c.provider().to_lowercase()))
            .map(|c| {
                self.violation(format!(
                    "provider '{}' not in allowed list for model '{}'",
                    c.provider(),
                    c.name
                ))
                .with_component(&c.name)
            })
            .collect()
    }
}
