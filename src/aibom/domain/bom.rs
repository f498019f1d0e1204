use super::serde_support::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Component type tag for AI models
pub const COMPONENT_TYPE_MODEL: &str = "model";
/// Component type tag for agent tools
pub const COMPONENT_TYPE_TOOL: &str = "tool";
/// Component type tag for frameworks and libraries
pub const COMPONENT_TYPE_FRAMEWORK: &str = "framework";

/// AI Bill of Materials document - a simplified CycloneDX-AI BOM
///
/// The AIBOM is read-only input: rules borrow it and never mutate it.
/// Only the fields the rules read are modelled; anything else in the
/// source document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aibom {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bom_format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub services: Vec<Service>,
}

impl Aibom {
    pub fn new(bom_format: impl Into<String>) -> Self {
        Self {
            bom_format: bom_format.into(),
            components: Vec::new(),
            services: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Iterates over components of type "model" in document order
    pub fn models(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_model())
    }

    /// Iterates over components of type "tool" in document order
    pub fn tools(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_tool())
    }

    pub fn model_count(&self) -> usize {
        self.models().count()
    }

    pub fn tool_count(&self) -> usize {
        self.tools().count()
    }
}

/// A model, tool, framework or library entry in the BOM
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: BTreeMap<String, String>,
}

impl Component {
    pub fn new(component_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::new(COMPONENT_TYPE_MODEL, name)
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Self::new(COMPONENT_TYPE_TOOL, name)
    }

    pub fn framework(name: impl Into<String>) -> Self {
        Self::new(COMPONENT_TYPE_FRAMEWORK, name)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn is_model(&self) -> bool {
        self.component_type == COMPONENT_TYPE_MODEL
    }

    pub fn is_tool(&self) -> bool {
        self.component_type == COMPONENT_TYPE_TOOL
    }

    /// Version string, empty when absent
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// Provider string, empty when absent
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or("")
    }

    /// A component is pinned when it carries a non-empty version
    pub fn is_versioned(&self) -> bool {
        !self.version().is_empty()
    }
}

/// An external network endpoint the AI system talks to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Host identifier used for endpoint allow-listing
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}
