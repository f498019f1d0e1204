use std::path::PathBuf;

/// EvaluationRequest - input for the policy evaluation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    /// Path to the AIBOM JSON document
    pub bom_path: PathBuf,
    /// Policy documents, evaluated in this order
    pub policy_paths: Vec<PathBuf>,
}

impl EvaluationRequest {
    pub fn new(bom_path: PathBuf, policy_paths: Vec<PathBuf>) -> Self {
        Self {
            bom_path,
            policy_paths,
        }
    }
}
