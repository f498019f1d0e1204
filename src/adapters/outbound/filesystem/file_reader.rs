use crate::aibom::domain::{Aibom, PolicyDocument, PolicyFormat};
use crate::ports::outbound::{BomReader, PolicyReader};
use crate::shared::error::PolicyError;
use crate::shared::security;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// FileSystemReader adapter for AIBOM and policy documents
///
/// Every read goes through [`security::read_document`], which rejects
/// symlinks, non-regular files and oversized documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl BomReader for FileSystemReader {
    fn read_bom(&self, path: &Path) -> Result<Aibom> {
        let content =
            security::read_document(path, "AIBOM").map_err(|e| PolicyError::BomReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let bom: Aibom =
            serde_json::from_str(&content).map_err(|e| PolicyError::BomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            components = bom.components.len(),
            services = bom.services.len(),
            "AIBOM loaded"
        );
        Ok(bom)
    }
}

impl PolicyReader for FileSystemReader {
    fn read_policy(&self, path: &Path) -> Result<PolicyDocument> {
        let content = security::read_document(path, "policy file").map_err(|e| {
            PolicyError::PolicyReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let format = PolicyFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "parsing policy document");

        PolicyDocument::parse(&content, format)
            .with_context(|| format!("Invalid policy file {}", path.display()))
    }
}
