use crate::aibom::domain::Aibom;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading an AI Bill of Materials
pub trait BomReader {
    /// Reads and deserializes the AIBOM at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, too large, or
    /// not a valid AIBOM JSON document
    fn read_bom(&self, path: &Path) -> Result<Aibom>;
}
