use super::{Aibom, Severity, Violation};
use std::fmt;

/// A configured policy assertion evaluated against an AIBOM
///
/// `id` and `name` are fixed per rule type and never depend on the
/// configured parameters. `evaluate` must be a pure scan of the BOM:
/// evaluating the same rule twice against the same BOM yields identical
/// violations, and every violation carries the rule's own severity.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable identifier, e.g. `AIBOM-001`
    fn id(&self) -> &'static str;

    /// Rule type name as it appears in policy documents, e.g. `deny-model`
    fn name(&self) -> &'static str;

    /// Human-readable description including the configured parameters
    fn description(&self) -> String;

    fn severity(&self) -> Severity;

    fn evaluate(&self, bom: &Aibom) -> Vec<Violation>;

    /// Starts a violation pre-filled with this rule's identity and severity
    fn violation(&self, message: String) -> Violation {
        Violation::new(self.id(), self.name(), self.severity(), message)
    }
}
