use crate::aibom::domain::{EvaluationResult, Severity};
use crate::application::read_models::EvaluationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter rendering a terminal-friendly report
///
/// ```text
/// Policy: governance
///   ✗ [CRITICAL] AIBOM-004: tool 'exec_sql' is denied: SQL exec is dangerous
///   Summary: 1 critical, 0 high, 0 medium, 0 low
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn severity_label(&self, severity: Severity) -> String {
        let label = format!("[{}]", severity.as_str().to_uppercase());
        if !self.colored {
            return label;
        }
        match severity {
            Severity::Critical => label.red().bold().to_string(),
            Severity::High => label.red().to_string(),
            Severity::Medium => label.yellow().to_string(),
            Severity::Low => label.blue().to_string(),
        }
    }

    fn mark(&self, passed: bool) -> String {
        match (passed, self.colored) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "✓".to_string(),
            (false, true) => "✗".red().to_string(),
            (false, false) => "✗".to_string(),
        }
    }

    fn render_result(&self, output: &mut String, result: &EvaluationResult) -> std::fmt::Result {
        writeln!(output, "Policy: {}", result.policy_name())?;

        if result.violations().is_empty() {
            writeln!(output, "  {} All checks passed", self.mark(true))?;
        }
        for violation in result.violations() {
            writeln!(
                output,
                "  {} {} {}: {}",
                self.mark(false),
                self.severity_label(violation.severity),
                violation.rule_id,
                violation.message
            )?;
        }

        writeln!(
            output,
            "  Summary: {} critical, {} high, {} medium, {} low",
            result.critical_count(),
            result.high_count(),
            result.medium_count(),
            result.low_count()
        )
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &EvaluationReport) -> Result<String> {
        let mut output = String::new();
        for (index, result) in report.results.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            self.render_result(&mut output, result)?;
        }
        Ok(output)
    }
}
