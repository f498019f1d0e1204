/// Built-in rule types
///
/// Each rule type is a small configuration struct implementing
/// [`Rule`](crate::aibom::domain::Rule) plus a `from_params` constructor that
/// decodes and validates the policy document's parameter map.
mod deny;
mod endpoints;
mod limits;
mod params;
mod providers;
mod versioning;

#[cfg(test)]
pub(crate) mod test_support;

pub use deny::{DenyModel, DenyTool};
pub use endpoints::DenyExternalEndpoints;
pub use limits::{MaxModels, MaxTools};
pub use params::RuleParams;
pub use providers::AllowedProviders;
pub use versioning::{RequireAllModelsVersioned, RequireModelVersion};
