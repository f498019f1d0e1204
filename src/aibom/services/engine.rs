use crate::aibom::domain::{Aibom, EvaluationResult, Policy};

/// Evaluates an ordered set of policies against a BOM
///
/// The engine holds no state between evaluations; the same policies may be
/// run against any number of BOMs, including concurrently.
#[derive(Debug, Default)]
pub struct PolicyEngine {
    policies: Vec<Policy>,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_policy(&mut self, policy: Policy) {
        tracing::debug!(
            policy = %policy.name,
            rules = policy.rule_count(),
            "policy added to engine"
        );
        self.policies.push(policy);
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Runs every rule of every policy against `bom`
    ///
    /// Returns one result per policy in insertion order. Within a result,
    /// violations follow rule order and then each rule's own emission order.
    pub fn evaluate_all(&self, bom: &Aibom) -> Vec<EvaluationResult> {
        self.policies
            .iter()
            .map(|policy| {
                let mut result = EvaluationResult::new(&policy.name);
                for rule in &policy.rules {
                    let violations = rule.evaluate(bom);
                    if !violations.is_empty() {
                        tracing::debug!(
                            policy = %policy.name,
                            rule = rule.name(),
                            count = violations.len(),
                            "rule reported violations"
                        );
                    }
                    result.extend(violations);
                }
                tracing::info!(
                    policy = %policy.name,
                    violations = result.violations().len(),
                    passed = result.passed(),
                    "policy evaluated"
                );
                result
            })
            .collect()
    }

    /// True when any result has a critical or high violation
    pub fn has_failures(results: &[EvaluationResult]) -> bool {
        results.iter().any(|r| !r.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aibom::domain::{Component, Severity};
    use crate::aibom::rules::test_support::sample_bom;
    use crate::aibom::rules::{
        AllowedProviders, DenyModel, DenyTool, MaxModels, MaxTools, RequireAllModelsVersioned,
    };

    #[test]
    fn test_empty_engine_yields_no_results() {
        let engine = PolicyEngine::new();
        let results = engine.evaluate_all(&sample_bom());
        assert!(results.is_empty());
        assert!(!PolicyEngine::has_failures(&results));
    }

    #[test]
    fn test_mixed_severity_policy_fails() {
        let policy = Policy::new("governance")
            .with_rule(DenyTool::new("exec_sql", "SQL exec is dangerous", Severity::Critical))
            .with_rule(AllowedProviders::new(
                vec!["openai".to_string(), "anthropic".to_string()],
                Severity::High,
            ))
            .with_rule(RequireAllModelsVersioned::new(Severity::Medium));

        let mut engine = PolicyEngine::new();
        engine.add_policy(policy);
        let results = engine.evaluate_all(&sample_bom());

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.policy_name(), "governance");
        assert_eq!(result.critical_count(), 1);
        assert_eq!(result.high_count(), 0);
        assert_eq!(result.medium_count(), 1);
        assert_eq!(result.low_count(), 0);
        assert!(!result.passed());
        assert!(PolicyEngine::has_failures(&results));

        let rule_ids: Vec<&str> = result.violations().iter().map(|v| v.rule_id.as_str()).collect();
        assert_eq!(rule_ids, vec!["AIBOM-004", "AIBOM-007"]);
        assert_eq!(
            result.violations()[1].component.as_deref(),
            Some("claude-3-sonnet")
        );
    }

    #[test]
    fn test_limits_policy_passes() {
        let policy = Policy::new("limits")
            .with_rule(MaxModels::new(5, Severity::Medium))
            .with_rule(MaxTools::new(5, Severity::Medium));

        let mut engine = PolicyEngine::new();
        engine.add_policy(policy);
        let results = engine.evaluate_all(&sample_bom());

        assert_eq!(results.len(), 1);
        assert!(results[0].violations().is_empty());
        assert!(results[0].passed());
        assert!(!PolicyEngine::has_failures(&results));
    }

    #[test]
    fn test_medium_and_low_only_still_pass() {
        let policy = Policy::new("soft")
            .with_rule(RequireAllModelsVersioned::new(Severity::Medium))
            .with_rule(MaxTools::new(0, Severity::Low));

        let mut engine = PolicyEngine::new();
        engine.add_policy(policy);
        let results = engine.evaluate_all(&sample_bom());

        assert_eq!(results[0].medium_count(), 1);
        assert_eq!(results[0].low_count(), 1);
        assert!(results[0].passed());
        assert!(!PolicyEngine::has_failures(&results));
    }

    #[test]
    fn test_results_follow_policy_order() {
        let mut engine = PolicyEngine::new();
        engine.add_policy(Policy::new("first"));
        engine.add_policy(
            Policy::new("second").with_rule(DenyModel::new("gpt", "", Severity::High)),
        );
        engine.add_policy(Policy::new("third"));

        let results = engine.evaluate_all(&sample_bom());
        let names: Vec<&str> = results.iter().map(|r| r.policy_name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(results[0].passed());
        assert!(!results[1].passed());
        assert!(PolicyEngine::has_failures(&results));
        assert_eq!(engine.policy_count(), 3);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let mut engine = PolicyEngine::new();
        engine.add_policy(
            Policy::new("p")
                .with_rule(DenyTool::new("exec", "", Severity::Critical))
                .with_rule(RequireAllModelsVersioned::new(Severity::Low)),
        );
        let bom = sample_bom().with_component(Component::model("mistral"));

        let first = engine.evaluate_all(&bom);
        let second = engine.evaluate_all(&bom);
        assert_eq!(first, second);
    }
}
