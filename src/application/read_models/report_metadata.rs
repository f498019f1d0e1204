use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Identifying metadata stamped on every report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: impl Into<String>,
        tool_name: impl Into<String>,
        tool_version: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            serial_number: serial_number.into(),
        }
    }

    /// Current UTC time in RFC 3339 and a fresh `urn:uuid:` serial number
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name,
            tool_version,
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata for this binary, using the compile-time package name and version
    pub fn for_this_tool() -> Self {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
