//! Read models consumed by report formatters
//!
//! The formatters never touch the engine; they render this denormalized
//! snapshot of one evaluation run.

mod evaluation_report;
mod report_metadata;

pub use evaluation_report::{EvaluationReport, SeverityTotals};
pub use report_metadata::ReportMetadata;
