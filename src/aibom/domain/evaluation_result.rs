use super::{Severity, Violation};
use serde::Serialize;

/// Outcome of evaluating one policy against one BOM
///
/// Counts are only updated through [`EvaluationResult::record`], so they
/// always equal the tally of `violations` by severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    policy_name: String,
    violations: Vec<Violation>,
    critical_count: usize,
    high_count: usize,
    medium_count: usize,
    low_count: usize,
}

impl EvaluationResult {
    pub fn new(policy_name: impl Into<String>) -> Self {
        Self {
            policy_name: policy_name.into(),
            violations: Vec::new(),
            critical_count: 0,
            high_count: 0,
            medium_count: 0,
            low_count: 0,
        }
    }

    /// Appends a violation and bumps the matching severity counter
    pub fn record(&mut self, violation: Violation) {
        match violation.severity {
            Severity::Critical => self.critical_count += 1,
            Severity::High => self.high_count += 1,
            Severity::Medium => self.medium_count += 1,
            Severity::Low => self.low_count += 1,
        }
        self.violations.push(violation);
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn critical_count(&self) -> usize {
        self.critical_count
    }

    pub fn high_count(&self) -> usize {
        self.high_count
    }

    pub fn medium_count(&self) -> usize {
        self.medium_count
    }

    pub fn low_count(&self) -> usize {
        self.low_count
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_count,
            Severity::High => self.high_count,
            Severity::Medium => self.medium_count,
            Severity::Low => self.low_count,
        }
    }

    /// A policy passes when it has no critical and no high violations
    pub fn passed(&self) -> bool {
        self.critical_count == 0 && self.high_count == 0
    }
}

impl Extend<Violation> for EvaluationResult {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        for violation in iter {
            self.record(violation);
        }
    }
}
