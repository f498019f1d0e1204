use std::collections::HashMap;
use std::path::{Path, PathBuf};
use aibom_policy::prelude::*;

/// Mock PolicyReader serving in-memory documents keyed by path
///
/// The format is chosen from the path's extension, as the real reader does.
#[derive(Default)]
pub struct MockPolicyReader {
    documents: HashMap<PathBuf, String>,
}

impl MockPolicyReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.documents.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl PolicyReader for MockPolicyReader {
    fn read_policy(&self, path: &Path) -> Result<PolicyDocument> {
        let Some(content) = self.documents.get(path) else {
            anyhow::bail!("Mock policy not found: {}", path.display());
        };
        Ok(PolicyDocument::parse(content, PolicyFormat::from_path(path))?)
    }
}
