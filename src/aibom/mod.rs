/// AIBOM policy domain - evaluation logic over in-memory documents
///
/// Rules and the engine never touch the filesystem;
/// `RuleRegistry::load_policy_file` is the single file-reading convenience.
///
/// - `domain`: BOM, severity, violation, policy and result types
/// - `rules`: the built-in rule types and their parameter decoding
/// - `services`: the rule registry and the evaluation engine
pub mod domain;
pub mod rules;
pub mod services;
