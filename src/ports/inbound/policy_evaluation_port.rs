use crate::application::dto::{EvaluationRequest, EvaluationResponse};
use crate::shared::Result;

/// PolicyEvaluationPort - Inbound port for evaluating policies against an AIBOM
///
/// This is the application's public entry point; the CLI only talks to the
/// core through it.
pub trait PolicyEvaluationPort {
    /// Loads the AIBOM and every policy named in `request`, then evaluates them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The AIBOM or a policy file cannot be read or parsed
    /// - A policy references an unknown rule type or carries invalid parameters
    /// - No policy was requested
    fn evaluate(&self, request: EvaluationRequest) -> Result<EvaluationResponse>;
}
