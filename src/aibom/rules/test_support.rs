use crate::aibom::domain::{Aibom, Component, Service};

/// Two models (one unversioned), two tools, a framework and two services
pub fn sample_bom() -> Aibom {
    Aibom::new("CycloneDX-AI")
        .with_component(
            Component::model("gpt-4")
                .with_version("2024-01")
                .with_provider("openai"),
        )
        .with_component(Component::model("claude-3-sonnet").with_provider("anthropic"))
        .with_component(Component::tool("web_search").with_version("1.0"))
        .with_component(Component::tool("exec_sql"))
        .with_component(Component::framework("langchain").with_version("0.1.0"))
        .with_service(Service::new("api.openai.com").with_endpoint("https://api.openai.com/v1"))
        .with_service(
            Service::new("api.anthropic.com").with_endpoint("https://api.anthropic.com"),
        )
}
