use crate::aibom::domain::PolicyDocument;
use crate::shared::Result;
use std::path::Path;

/// PolicyReader port for loading policy documents
///
/// Readers only deserialize; resolving rule types is the registry's job.
pub trait PolicyReader {
    /// Reads the policy document at `path` (JSON, TOML or YAML)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not deserialize
    /// into a policy document
    fn read_policy(&self, path: &Path) -> Result<PolicyDocument>;
}
