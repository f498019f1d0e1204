use crate::aibom::domain::EvaluationResult;
use crate::application::read_models::EvaluationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const SUMMARY_HEADER: &str = "| Policy | Status | Critical | High | Medium | Low |\n";
const SUMMARY_SEPARATOR: &str = "|--------|--------|----------|------|--------|-----|\n";

const VIOLATION_HEADER: &str = "| Severity | Rule | Component | Message |\n";
const VIOLATION_SEPARATOR: &str = "|----------|------|-----------|---------|\n";

/// MarkdownFormatter adapter rendering a report for pull requests and wikis
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn status(passed: bool) -> &'static str {
        if passed {
            "✅ Passed"
        } else {
            "❌ Failed"
        }
    }

    fn render_header(&self, output: &mut String, report: &EvaluationReport) {
        output.push_str("# AIBOM Policy Report\n\n");
        output.push_str(&format!(
            "- **BOM format:** {}\n",
            Self::escape_cell(&report.bom_format)
        ));
        output.push_str(&format!(
            "- **Generated:** {} by {} {}\n",
            report.metadata.timestamp(),
            report.metadata.tool_name(),
            report.metadata.tool_version()
        ));
        output.push_str(&format!(
            "- **Serial number:** `{}`\n",
            report.metadata.serial_number()
        ));
        output.push_str(&format!("- **Result:** {}\n\n", Self::status(report.passed())));
    }

    fn render_summary(&self, output: &mut String, results: &[EvaluationResult]) {
        output.push_str("## Summary\n\n");
        output.push_str(SUMMARY_HEADER);
        output.push_str(SUMMARY_SEPARATOR);
        for result in results {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(result.policy_name()),
                Self::status(result.passed()),
                result.critical_count(),
                result.high_count(),
                result.medium_count(),
                result.low_count()
            ));
        }
        output.push('\n');
    }

    fn render_policy(&self, output: &mut String, result: &EvaluationResult) {
        output.push_str(&format!(
            "## Policy: {}\n\n",
            Self::escape_cell(result.policy_name())
        ));

        if result.violations().is_empty() {
            output.push_str("No violations found.\n\n");
            return;
        }

        output.push_str(VIOLATION_HEADER);
        output.push_str(VIOLATION_SEPARATOR);
        for violation in result.violations() {
            output.push_str(&format!(
                "| {} | {} ({}) | {} | {} |\n",
                violation.severity.as_str().to_uppercase(),
                violation.rule_id,
                violation.rule_name,
                violation
                    .component
                    .as_deref()
                    .map(Self::escape_cell)
                    .unwrap_or_else(|| "-".to_string()),
                Self::escape_cell(&violation.message)
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &EvaluationReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_summary(&mut output, &report.results);
        for result in &report.results {
            self.render_policy(&mut output, result);
        }
        Ok(output)
    }
}
