/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: document readers, report rendering, output and progress display.
pub mod bom_reader;
pub mod output_presenter;
pub mod policy_reader;
pub mod progress_reporter;
pub mod report_formatter;

pub use bom_reader::BomReader;
pub use output_presenter::OutputPresenter;
pub use policy_reader::PolicyReader;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
