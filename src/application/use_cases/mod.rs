/// Use cases orchestrating the policy domain through ports
mod evaluate_policies;

pub use evaluate_policies::EvaluatePoliciesUseCase;
