use crate::application::read_models::EvaluationReport;

/// EvaluationResponse - output of the policy evaluation use case
#[derive(Debug, Clone)]
pub struct EvaluationResponse {
    pub report: EvaluationReport,
}

impl EvaluationResponse {
    pub fn new(report: EvaluationReport) -> Self {
        Self { report }
    }

    /// True when any policy has a critical or high violation
    ///
    /// Drives the process exit code for CI integration.
    pub fn has_failures(&self) -> bool {
        !self.report.passed()
    }
}
