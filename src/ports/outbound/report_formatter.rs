use crate::application::read_models::EvaluationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering evaluation reports
///
/// This port abstracts the output representation (text, JSON, Markdown).
pub trait ReportFormatter {
    /// Renders the full report as a string ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &EvaluationReport) -> Result<String>;
}
