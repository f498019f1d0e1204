/// ProgressReporter port for user-facing progress during evaluation
///
/// Implementations must stay off stdout so reports can be piped.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports `current` out of `total` steps, with an optional label
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole operation
    fn report_completion(&self, message: &str);
}
