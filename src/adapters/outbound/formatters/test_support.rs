use crate::aibom::domain::{EvaluationResult, Severity, Violation};
use crate::application::read_models::{EvaluationReport, ReportMetadata};

/// One failing and one passing policy, with fixed metadata
pub fn sample_report() -> EvaluationReport {
    let mut governance = EvaluationResult::new("governance");
    governance.record(
        Violation::new(
            "AIBOM-004",
            "deny-tool",
            Severity::Critical,
            "tool 'exec_sql' is denied: SQL exec is dangerous",
        )
        .with_component("exec_sql"),
    );
    governance.record(
        Violation::new(
            "AIBOM-007",
            "require-all-models-versioned",
            Severity::Medium,
            "model 'claude-3-sonnet' has no pinned version",
        )
        .with_component("claude-3-sonnet"),
    );

    EvaluationReport::new(
        ReportMetadata::new(
            "2026-01-01T00:00:00+00:00",
            "aibom-policy",
            "0.1.0",
            "urn:uuid:00000000-0000-4000-8000-000000000000",
        ),
        "CycloneDX-AI",
        vec![governance, EvaluationResult::new("limits")],
    )
}
