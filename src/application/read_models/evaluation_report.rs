use super::ReportMetadata;
use crate::aibom::domain::{EvaluationResult, Severity};

/// Violation counts summed over every policy of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityTotals {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityTotals {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Everything a formatter needs to render one evaluation run
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub metadata: ReportMetadata,
    pub bom_format: String,
    pub results: Vec<EvaluationResult>,
}

impl EvaluationReport {
    pub fn new(
        metadata: ReportMetadata,
        bom_format: impl Into<String>,
        results: Vec<EvaluationResult>,
    ) -> Self {
        Self {
            metadata,
            bom_format: bom_format.into(),
            results,
        }
    }

    /// True only when every policy passed
    pub fn passed(&self) -> bool {
        self.results.iter().all(EvaluationResult::passed)
    }

    pub fn totals(&self) -> SeverityTotals {
        self.results
            .iter()
            .fold(SeverityTotals::default(), |mut acc, result| {
                acc.critical += result.count(Severity::Critical);
                acc.high += result.count(Severity::High);
                acc.medium += result.count(Severity::Medium);
                acc.low += result.count(Severity::Low);
                acc
            })
    }

    pub fn failed_policy_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }
}
