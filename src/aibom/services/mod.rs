//! Policy resolution and evaluation
pub mod engine;
pub mod registry;

pub use engine::PolicyEngine;
pub use registry::{RuleBuilder, RuleRegistry};
