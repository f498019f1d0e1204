use std::path::Path;
use aibom_policy::prelude::*;

/// Mock BomReader returning a fixed AIBOM
pub struct MockBomReader {
    pub bom: Aibom,
    pub should_fail: bool,
}

impl MockBomReader {
    pub fn new(bom: Aibom) -> Self {
        Self {
            bom,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            bom: Aibom::default(),
            should_fail: true,
        }
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, _path: &Path) -> Result<Aibom> {
        if self.should_fail {
            anyhow::bail!("Mock AIBOM read failure");
        }
        Ok(self.bom.clone())
    }
}
