pub mod bom;
pub mod evaluation_result;
pub mod policy;
pub mod rule;
mod serde_support;
pub mod severity;
pub mod violation;

pub use bom::{Aibom, Component, Service};
pub use evaluation_result::EvaluationResult;
pub use policy::{Policy, PolicyDocument, PolicyFormat, RuleDefinition};
pub use rule::Rule;
pub use severity::Severity;
pub use violation::Violation;
